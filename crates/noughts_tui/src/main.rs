//! Noughts - play tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts_tui::{UiConfig, cli::Cli, tui};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = UiConfig::load(cli.config.as_deref())?;
    init_logging(&cli.log_file, &config)?;

    match tui::run(&config) {
        Ok(score) => {
            info!(human = score.human(), computer = score.computer(), "Goodbye");
            Ok(())
        }
        Err(err) if err.downcast_ref::<tui::Interrupted>().is_some() => Ok(()),
        Err(err) => Err(err),
    }
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_logging(path: &Path, config: &UiConfig) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
