//! src/cli.rs
//!
//! Command-line options for the monitor.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "braille-monitor",
    version,
    about = "Scrolling braille graphs of live samples in the terminal"
)]
pub struct Args {
    /// Milliseconds between generated samples.
    #[arg(long, default_value_t = 1_000)]
    pub tick_ms: u64,

    /// Fixed vertical ceiling for both graphs; 0 enables auto-scale.
    #[arg(long, default_value_t = 100)]
    pub ceiling: u64,

    /// Read samples for the first graph from this serial port, one integer per line.
    #[arg(long, value_name = "PORT")]
    pub serial: Option<String>,

    #[arg(long, default_value_t = 115_200)]
    pub baud: u32,

    /// Bind address of the line-based control server.
    #[arg(long, default_value = "127.0.0.1:4000", value_name = "ADDR")]
    pub remote: String,

    /// Do not start the control server.
    #[arg(long)]
    pub no_remote: bool,

    /// Directory for the log file (defaults to the system temp directory).
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["braille-monitor"]).unwrap();
        assert_eq!(args.tick_ms, 1_000);
        assert_eq!(args.ceiling, 100);
        assert_eq!(args.remote, "127.0.0.1:4000");
        assert!(args.serial.is_none());
        assert!(!args.no_remote);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "braille-monitor",
            "--ceiling",
            "0",
            "--serial",
            "/dev/ttyACM0",
            "--baud",
            "9600",
            "--no-remote",
        ])
        .unwrap();
        assert_eq!(args.ceiling, 0);
        assert_eq!(args.serial.as_deref(), Some("/dev/ttyACM0"));
        assert_eq!(args.baud, 9_600);
        assert!(args.no_remote);
    }

    #[test]
    fn test_rejects_negative_ceiling() {
        assert!(Args::try_parse_from(["braille-monitor", "--ceiling", "-5"]).is_err());
    }
}
