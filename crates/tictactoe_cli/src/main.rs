//! Tic-tac-toe terminal frontend.
//!
//! Reads commands from stdin (or `--script`), drives a game session and
//! prints the board, status and move list after each command.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod command;
mod config;
mod render;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use config::Settings;
use tictactoe_core::MoveOrder;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    if cli.descending {
        settings = settings.with_move_order(MoveOrder::Descending);
    }
    debug!(?settings, "Settings resolved");

    let mut app = App::new(settings);
    let stdout = std::io::stdout();

    match cli.script {
        Some(script) => {
            info!("Running scripted commands");
            let lines = script.replace(';', "\n");
            app.run(lines.as_bytes(), stdout.lock())?;
        }
        None => {
            info!("Reading commands from stdin");
            app.run(std::io::stdin().lock(), stdout.lock())?;
        }
    }

    info!(status = %app.session().status_line(), "Session ended");
    Ok(())
}
