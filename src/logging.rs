//! src/logging.rs
//!
//! File logging through `tracing`; the terminal itself belongs to the UI.

use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE: &str = "braille-monitor.log";

/// Install the global subscriber, writing to `<dir>/braille-monitor.log`.
///
/// The filter comes from `BRAILLE_MONITOR_LOG`, e.g.
/// `BRAILLE_MONITOR_LOG=braille_monitor=trace cargo run`.
pub fn init(dir: Option<&Path>) -> color_eyre::Result<PathBuf> {
    let dir = dir.map(Path::to_path_buf).unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let env_filter = EnvFilter::try_from_env("BRAILLE_MONITOR_LOG")
        .unwrap_or_else(|_| EnvFilter::new("braille_monitor=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()?;

    let path = dir.join(LOG_FILE);
    tracing::info!("braille-monitor starting, logging to {}", path.display());
    Ok(path)
}
