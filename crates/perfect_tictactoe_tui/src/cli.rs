//! Command-line interface for the tic-tac-toe controller.

use clap::Parser;
use perfect_tictactoe::{Scoring, Strategy};
use std::path::PathBuf;

use crate::settings::FirstPlayer;

/// Play tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect-play computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (ignored if missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Who moves first
    #[arg(long, value_enum)]
    pub first: Option<FirstPlayer>,

    /// Pause before the computer replies, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Terminal scoring: depth-adjusted or flat
    #[arg(long)]
    pub scoring: Option<Scoring>,

    /// Tree walk: exhaustive or alpha-beta
    #[arg(long)]
    pub strategy: Option<Strategy>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
