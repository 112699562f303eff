//! src/main.rs
//!
//! Entrypoint: parse arguments, set up error reporting and logging, then
//! delegate to `app::run()`.

mod app;
mod cli;
mod logging;
mod net;
mod panels;
mod source;
mod ui;

use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();
    logging::init(args.log_dir.as_deref())?;
    app::run(args)
}
