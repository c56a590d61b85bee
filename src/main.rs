//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `a11y_status` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use a11y_status::initialization::init_logger_with;
use a11y_status::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present (PORT, database path)
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        eprintln!("a11y_status error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
