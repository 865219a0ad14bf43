//! Command-line interface for unbeatable.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Unbeatable - tic-tac-toe against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "unbeatable")]
#[command(about = "Play tic-tac-toe against an opponent that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal as X
    Play {
        /// Path to the TOML config file (defaults are used if it doesn't exist)
        #[arg(short, long, default_value = "unbeatable.toml")]
        config: PathBuf,

        /// Pause before the computer's move is shown, in milliseconds
        #[arg(long)]
        reveal_delay_ms: Option<u64>,

        /// Show the engine's suggestion for X in the status bar
        #[arg(long)]
        hints: bool,
    },

    /// Print the computer's move for a board
    Suggest {
        /// Nine cells, row-major: X, O, and '.' for empty (e.g. "XX.O.....")
        #[arg(short, long)]
        board: String,

        /// Print the full search report as JSON
        #[arg(long)]
        json: bool,
    },
}
