//! Tactoe - unified CLI
//!
//! Terminal tic-tac-toe against a heuristic computer opponent, plus a
//! headless simulation mode.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod alerts;
mod cli;
mod config;
mod simulate;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            delay_ms,
            seed,
        } => run_play(config, delay_ms, seed).await,
        Command::Simulate { games, seed, json } => run_simulate(games, seed, json),
    }
}

/// Run the terminal UI
async fn run_play(config: PathBuf, delay_ms: Option<u64>, seed: Option<u64>) -> Result<()> {
    let config = GameConfig::load_or_default(&config)?.with_overrides(delay_ms, seed);

    // Log to a file so the UI owns the terminal
    init_file_logging(config.log_file())?;
    info!(?config, "Starting play session");

    tui::run_tui(config).await
}

/// Run headless games and print the tally
fn run_simulate(games: u32, seed: u64, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let tally = simulate::simulate(games, seed)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{}", tally.summary());
    }
    Ok(())
}

fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
