//! Tic-tac-toe - interactive terminal game.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tic_tac_toe::{Driver, DriverConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DriverConfig::from_file(path)?,
        None => DriverConfig::default(),
    };
    if let Some(placeholder) = cli.placeholder {
        config = config.with_placeholder(placeholder);
    }

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Driver configuration");
    info!("Starting tic-tac-toe");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut driver = Driver::new(stdin.lock(), stdout.lock(), config);
    let game = driver.run()?;

    info!(turns = game.turn_number() - 1, winner = ?game.winner(), "Session complete");
    Ok(())
}
