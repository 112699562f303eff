//! src/app.rs
//!
//! # Top-Level Application (`app.rs`)
//!
//! Builds the graphs, starts the sample producers and the control server,
//! and runs the single-threaded UI loop.
//!
//! ## Overview
//! The application:
//! - Renders two live braille graphs, "CPU" (upright) and "GPU" (inverted).
//! - Feeds them from random-walk producers, or feeds the first one from a
//!   serial port (`--serial /dev/ttyACM0`), one integer per line.
//! - Provides keyboard controls per graph.
//! - Spawns a TCP control server that accepts line-based ASCII commands.
//!
//! # Keyboard Controls
//!
//! - **Tab**: Cycle focus among graphs.
//! - **a**: Auto-scale the focused graph against its window maximum.
//! - **f**: Scale the focused graph against the fixed ceiling (`--ceiling`).
//! - **i**: Flip the focused graph upside down.
//! - **q** / **Esc**: Quit and restore terminal state.
//!
//! # Remote TCP Protocol (ASCII, Line-Based)
//!
//! **Default bind address:** `127.0.0.1:4000` (`--remote`, `--no-remote`)
//!
//! - `autoscale <idx>`: auto-scale graph `<idx>`.
//! - `ceiling <idx> <val>`: fixed ceiling `<val>`; `0` means auto-scale.
//! - `invert <idx> <on|off>`: orientation.
//! - `push <idx> <val>`: append a sample; negative values are refused.
//! - `quit`: replies `OK bye` and closes the connection.
//!
//! ```text
//! $ nc 127.0.0.1 4000
//! push 0 73
//! OK
//! push 0 -1
//! ERR sample values must be non-negative, got -1
//! ```
//!
//! # Event Flow
//!
//! Producers, control connections and the keyboard never touch a graph
//! directly. Everything arrives as an [`AppEvent`] on one channel and is
//! applied by the UI loop in arrival order. A sample yields a
//! `Notification`, which goes through the `UpdateQueue` so only the graph
//! that issued it records the update. Before every draw each graph is
//! reflowed to its panel's inner area; resizing to an unchanged size is a
//! no-op, so this is cheap.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Frame, style::Color};

use braille_monitor::graph::{Graph, GraphConfig, IdRegistry, UpdateQueue};

use crate::cli::Args;
use crate::net::remote::{Command, remote_server};
use crate::panels::{FooterPanel, GraphPanel, HistoryPanel, InfoPanel, TitlePanel};
use crate::source;
use crate::ui::{Panel, Screen};

/// Ceiling used by the `f` key and the random walk when `--ceiling 0`.
const DEFAULT_CEILING: u64 = 100;

/// Everything the UI loop reacts to besides the keyboard.
pub enum AppEvent {
    Sample {
        graph: usize,
        value: i64,
    },
    Remote {
        command: Command,
        reply: Sender<String>,
    },
    SourceClosed {
        name: String,
    },
}

/// Presentation of one graph; kept apart so `graphs` stays a plain slice.
struct GraphStyle {
    title: &'static str,
    color: Color,
}

pub struct App {
    graphs: Vec<Graph>,
    styles: Vec<GraphStyle>,
    queue: UpdateQueue,
    focused: usize,
    ceiling: u64,
    running: bool,
    status: String,
}

impl App {
    pub fn new(ceiling: u64, registry: &IdRegistry) -> Self {
        let cfg = GraphConfig::default().ceiling(ceiling);
        let graphs = vec![
            Graph::new(cfg.clone(), registry),
            Graph::new(cfg.inverted(true), registry),
        ];
        let styles = vec![
            GraphStyle {
                title: "CPU",
                color: Color::Magenta,
            },
            GraphStyle {
                title: "GPU",
                color: Color::LightBlue,
            },
        ];
        Self {
            graphs,
            styles,
            queue: UpdateQueue::new(),
            focused: 0,
            ceiling,
            running: true,
            status: "Press Q to quit.".to_string(),
        }
    }

    pub fn graph_count(&self) -> usize {
        self.graphs.len()
    }

    fn fixed_ceiling(&self) -> u64 {
        if self.ceiling == 0 {
            DEFAULT_CEILING
        } else {
            self.ceiling
        }
    }

    /// Apply one event; remote commands are answered through their reply channel.
    pub fn handle_event(&mut self, ev: AppEvent) {
        match ev {
            AppEvent::Sample { graph, value } => {
                if let Err(e) = self.push_sample(graph, value) {
                    tracing::warn!("dropping sample {} for graph {}: {}", value, graph, e);
                }
            }
            AppEvent::Remote { command, reply } => {
                let answer = self.apply_command(command);
                let _ = reply.send(answer);
            }
            AppEvent::SourceClosed { name } => {
                self.status = format!("Source {} closed.", name);
            }
        }
    }

    fn push_sample(&mut self, graph: usize, value: i64) -> std::result::Result<(), String> {
        let g = self
            .graphs
            .get_mut(graph)
            .ok_or_else(|| format!("no graph {}", graph))?;
        let notification = g.on_new_sample(value).map_err(|e| e.to_string())?;
        self.queue.push(notification);
        Ok(())
    }

    /// Execute a control command and build its reply line.
    pub fn apply_command(&mut self, command: Command) -> String {
        let result = match command {
            Command::AutoScale(idx) => self.with_graph(idx, |g| g.set_auto_scale()),
            Command::Ceiling(idx, val) => self.with_graph(idx, |g| g.set_fixed_ceiling(val)),
            Command::Invert(idx, on) => self.with_graph(idx, |g| g.set_inverted(on)),
            Command::Push(idx, val) => self.push_sample(idx, val),
            Command::Quit => Ok(()),
        };
        match result {
            Ok(()) => "OK".to_string(),
            Err(e) => format!("ERR {}", e),
        }
    }

    fn with_graph<F: FnOnce(&mut Graph)>(
        &mut self,
        idx: usize,
        f: F,
    ) -> std::result::Result<(), String> {
        let g = self
            .graphs
            .get_mut(idx)
            .ok_or_else(|| format!("no graph {}", idx))?;
        f(g);
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        let ceiling = self.fixed_ceiling();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Tab => self.focused = (self.focused + 1) % self.graphs.len().max(1),
            KeyCode::Char('a') | KeyCode::Char('f') | KeyCode::Char('i') => {
                let Some(g) = self.graphs.get_mut(self.focused) else {
                    tracing::warn!("key {:?} ignored: no graph {}", code, self.focused);
                    return;
                };
                match code {
                    KeyCode::Char('a') => g.set_auto_scale(),
                    KeyCode::Char('f') => g.set_fixed_ceiling(ceiling),
                    _ => g.set_inverted(!g.is_inverted()),
                }
            }
            _ => {}
        }
    }

    /// Deliver pending notifications to the graphs that issued them.
    pub fn flush_updates(&mut self) -> usize {
        self.queue.dispatch(&mut self.graphs)
    }

    /// Reflow every graph to the inner area of its panel.
    fn fit(&mut self, screen: &Screen) {
        for (g, areas) in self.graphs.iter_mut().zip(&screen.graphs) {
            let inner = GraphPanel::block().inner(areas.chart);
            if let Err(e) = g.resize(i64::from(inner.width), i64::from(inner.height)) {
                tracing::warn!("resize of graph {} failed: {}", g.id(), e);
            }
        }
    }

    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let screen = Screen::new(f.area(), self.graphs.len());
        self.fit(&screen);

        let focused = self.styles.get(self.focused).map_or("", |s| s.title);
        TitlePanel::new("braille-monitor", focused).draw(f, screen.title);

        for (i, ((g, style), areas)) in self
            .graphs
            .iter()
            .zip(&self.styles)
            .zip(&screen.graphs)
            .enumerate()
        {
            let mut chart = GraphPanel::new(g, style.title, style.color);
            chart.focused = i == self.focused;
            chart.draw(f, areas.chart);

            let mut info = InfoPanel::new(g, style.title);
            info.highlighted = i == self.focused;
            info.draw(f, areas.info);

            HistoryPanel::new(g).draw(f, areas.history);
        }

        FooterPanel::new(&self.status).draw(f, screen.footer);
    }
}

/// Apply every event currently queued, without blocking.
fn drain(app: &mut App, rx: &Receiver<AppEvent>) {
    loop {
        match rx.try_recv() {
            Ok(ev) => app.handle_event(ev),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    let registry = IdRegistry::new();
    let mut app = App::new(args.ceiling, &registry);
    let (tx, rx) = mpsc::channel::<AppEvent>();

    // Sample producers
    let tick = Duration::from_millis(args.tick_ms.max(1));
    let walk_ceiling = app.fixed_ceiling();
    match args.serial.as_deref() {
        Some(port) => source::spawn_serial_reader(port, args.baud, 0, tx.clone()),
        None => source::spawn_random_walk(0, walk_ceiling, tick, tx.clone()),
    }
    source::spawn_random_walk(1, walk_ceiling, tick, tx.clone());

    // Remote control thread
    if !args.no_remote {
        let tx = tx.clone();
        let addr = args.remote.clone();
        let count = app.graph_count();
        thread::spawn(move || remote_server(&addr, count, tx));
    }

    let mut terminal = ratatui::init();
    let frame_time = Duration::from_millis(50);
    let result = (|| -> Result<()> {
        while app.running {
            let frame_start = Instant::now();

            drain(&mut app, &rx);
            app.flush_updates();
            terminal.draw(|f| app.draw(f))?;

            while event::poll(Duration::from_millis(0))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            let elapsed = frame_start.elapsed();
            if elapsed < frame_time {
                thread::sleep(frame_time - elapsed);
            }
        }
        Ok(())
    })();

    ratatui::restore();
    tracing::info!("braille-monitor exiting");
    result
}
