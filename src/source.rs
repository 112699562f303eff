//! src/source.rs
//!
//! Sample producers. Each runs on its own thread and hands integer samples
//! to the UI loop as `AppEvent::Sample`; the loop applies them in arrival
//! order. Producers stop once the UI loop has gone away.

use std::io::{BufRead, BufReader};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use rand::Rng;

use crate::app::AppEvent;

/// Spawn a bounded random walk in `[0, ceiling]` feeding graph `graph`.
///
/// Stands in for a utilisation sensor (CPU, GPU) when no real source is wired.
pub fn spawn_random_walk(graph: usize, ceiling: u64, tick: Duration, tx: Sender<AppEvent>) {
    let ceiling = i64::try_from(ceiling).unwrap_or(i64::MAX).max(1);
    thread::spawn(move || {
        let mut rng = rand::rng();
        let mut value = rng.random_range(0..=ceiling);
        loop {
            if tx.send(AppEvent::Sample { graph, value }).is_err() {
                break;
            }
            value = step(value, rng.random_range(-12..=12), ceiling);
            thread::sleep(tick);
        }
        tracing::debug!("random walk for graph {} stopped", graph);
    });
}

/// Next random-walk position, kept inside `[0, ceiling]`.
fn step(value: i64, delta: i64, ceiling: i64) -> i64 {
    value.saturating_add(delta).clamp(0, ceiling)
}

/// Spawn a thread reading samples for graph `graph` from a serial port,
/// one integer per line (e.g. `42` or `42 %`).
pub fn spawn_serial_reader(port_name: &str, baud_rate: u32, graph: usize, tx: Sender<AppEvent>) {
    let port_name = port_name.to_string();
    thread::spawn(move || {
        tracing::info!("opening serial port {} @ {} baud", port_name, baud_rate);
        let port = match serialport::new(&port_name, baud_rate)
            .timeout(Duration::from_secs(10))
            .open()
        {
            Ok(p) => p,
            Err(e) => {
                tracing::error!("failed to open serial port {}: {}", port_name, e);
                let _ = tx.send(AppEvent::SourceClosed {
                    name: port_name.clone(),
                });
                return;
            }
        };
        let reader = BufReader::new(port);
        for line_res in reader.lines() {
            match line_res {
                Ok(line) => {
                    let Some(value) = parse_sample_line(&line) else {
                        if !line.trim().is_empty() {
                            tracing::debug!("ignoring serial line {:?}", line);
                        }
                        continue;
                    };
                    if tx.send(AppEvent::Sample { graph, value }).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    tracing::warn!("error reading serial data: {}", e);
                    break;
                }
            }
        }
        tracing::info!("serial reader on {} exiting", port_name);
        let _ = tx.send(AppEvent::SourceClosed { name: port_name });
    });
}

/// Parse the leading integer of a line, ignoring a trailing `%` or unit word.
fn parse_sample_line(line: &str) -> Option<i64> {
    let first = line.split_whitespace().next()?;
    first.trim_end_matches('%').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample_line() {
        assert_eq!(parse_sample_line("42"), Some(42));
        assert_eq!(parse_sample_line("  17 %\r"), Some(17));
        assert_eq!(parse_sample_line("88% load"), Some(88));
        assert_eq!(parse_sample_line("-3"), Some(-3));
    }

    #[test]
    fn test_parse_sample_line_rejects_garbage() {
        assert_eq!(parse_sample_line(""), None);
        assert_eq!(parse_sample_line("RSSI -94.5"), None);
        assert_eq!(parse_sample_line("4.5"), None);
    }

    #[test]
    fn test_step_stays_in_range() {
        assert_eq!(step(5, -10, 100), 0);
        assert_eq!(step(95, 10, 100), 100);
        assert_eq!(step(50, 3, 100), 53);
    }
}
