//! Command-line interface for tactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tactoe - tic-tac-toe against a heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "tactoe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the TOML config file (defaults apply if it does not exist)
        #[arg(short, long, default_value = "tactoe.toml")]
        config: PathBuf,

        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the computer's random fallback
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit a random human against the computer without a UI
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "1000")]
        games: u32,

        /// Seed for both the random human and the computer
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}
