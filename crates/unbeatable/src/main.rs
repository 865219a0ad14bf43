//! Unbeatable - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unbeatable::suggest;
use unbeatable::tui;
use unbeatable::{Cli, Command, PlayConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            reveal_delay_ms,
            hints,
        } => run_play(&config, reveal_delay_ms, hints).await,
        Command::Suggest { board, json } => run_suggest(&board, json),
    }
}

/// Run the terminal game
async fn run_play(config_path: &Path, reveal_delay_ms: Option<u64>, hints: bool) -> Result<()> {
    let config =
        PlayConfig::load_or_default(config_path)?.with_overrides(reveal_delay_ms, hints);

    // Log to a file so output doesn't interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting Unbeatable");
    tui::run_tui(config).await
}

/// Print the engine's move for a board
fn run_suggest(board: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (board, report) = suggest::suggest(board)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", suggest::render(&board, &report));
    }
    Ok(())
}
