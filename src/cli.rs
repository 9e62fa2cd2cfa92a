//! Command-line interface for tic_tac_toe.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tic_tac_toe")]
#[command(about = "Play tic-tac-toe against a friend in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default names, placeholder, log filter)
    #[arg(short, long, env = "TIC_TAC_TOE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Character shown in empty cells
    #[arg(long)]
    pub placeholder: Option<char>,
}
