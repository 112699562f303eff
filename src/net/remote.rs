//! src/net/remote.rs
//!
//! Tiny line-based TCP control server.
//!
//! Connection threads only parse; every command is handed to the UI loop as
//! an `AppEvent::Remote`, applied there in order, and the reply travels back
//! over a per-command channel.

use std::io::{BufRead, BufReader, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

use crate::app::AppEvent;

/// How long a client waits for the UI loop to apply its command.
const REPLY_TIMEOUT: Duration = Duration::from_secs(2);

/// A parsed control command; graph indices are already range-checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    AutoScale(usize),
    Ceiling(usize, u64),
    Invert(usize, bool),
    Push(usize, i64),
    Quit,
}

/// Start the remote TCP server and spawn a handler thread per client.
pub fn remote_server(addr: &str, graph_count: usize, tx: Sender<AppEvent>) {
    let listener = match TcpListener::bind(addr) {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("remote_server: bind error {} on {}", e, addr);
            return;
        }
    };
    tracing::info!("remote_server: listening on {}", addr);

    for stream in listener.incoming() {
        match stream {
            Ok(s) => {
                let tx = tx.clone();
                thread::spawn(move || handle_remote_client(s, graph_count, tx));
            }
            Err(e) => {
                tracing::warn!("remote_server: accept error: {}", e);
            }
        }
    }
}

/// Handle a single client; one reply line (`OK ...` / `ERR ...`) per command.
///
/// Commands:
/// - `autoscale <idx>`
/// - `ceiling <idx> <val>`
/// - `invert <idx> <on|off>`
/// - `push <idx> <val>`
/// - `quit`
pub fn handle_remote_client(mut s: TcpStream, graph_count: usize, tx: Sender<AppEvent>) {
    let peer = s
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "<peer?>".into());
    tracing::debug!("remote client {} connected", peer);
    let mut rdr = match s.try_clone() {
        Ok(r) => BufReader::new(r),
        Err(e) => {
            tracing::warn!("remote client {}: {}", peer, e);
            return;
        }
    };
    let mut line = String::new();

    loop {
        line.clear();
        match rdr.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        if line.trim().is_empty() {
            continue;
        }

        let reply = match parse_command(&line, graph_count) {
            Ok(Command::Quit) => {
                let _ = s.write_all(b"OK bye\n");
                break;
            }
            Ok(command) => forward(command, &tx),
            Err(e) => format!("ERR {}", e),
        };
        if s.write_all(format!("{}\n", reply).as_bytes()).is_err() {
            break;
        }
    }

    tracing::debug!("remote client {} disconnected", peer);
    let _ = s.shutdown(Shutdown::Both);
}

/// Hand `command` to the UI loop and wait for its reply.
fn forward(command: Command, tx: &Sender<AppEvent>) -> String {
    let (reply_tx, reply_rx) = mpsc::channel();
    if tx
        .send(AppEvent::Remote {
            command,
            reply: reply_tx,
        })
        .is_err()
    {
        return "ERR shutting down".to_string();
    }
    reply_rx
        .recv_timeout(REPLY_TIMEOUT)
        .unwrap_or_else(|_| "ERR timeout".to_string())
}

/// Parse one whitespace-separated command line.
pub fn parse_command(line: &str, graph_count: usize) -> Result<Command, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(verb) = parts.first() else {
        return Err("empty".to_string());
    };
    let index = |s: &str| -> Result<usize, String> {
        let idx = s.parse::<usize>().map_err(|_| "idx".to_string())?;
        if idx < graph_count {
            Ok(idx)
        } else {
            Err(format!("no graph {}", idx))
        }
    };

    match (verb.to_lowercase().as_str(), parts.len()) {
        ("autoscale", 2) => Ok(Command::AutoScale(index(parts[1])?)),
        ("ceiling", 3) => {
            let idx = index(parts[1])?;
            let val = parts[2].parse::<u64>().map_err(|_| "val".to_string())?;
            Ok(Command::Ceiling(idx, val))
        }
        ("invert", 3) => {
            let idx = index(parts[1])?;
            let on = match parts[2].to_lowercase().as_str() {
                "on" | "true" | "1" => true,
                "off" | "false" | "0" => false,
                _ => return Err("val".to_string()),
            };
            Ok(Command::Invert(idx, on))
        }
        ("push", 3) => {
            let idx = index(parts[1])?;
            let val = parts[2].parse::<i64>().map_err(|_| "val".to_string())?;
            Ok(Command::Push(idx, val))
        }
        ("quit", 1) => Ok(Command::Quit),
        _ => Err(format!("unknown {}", parts.join(" "))),
    }
}
