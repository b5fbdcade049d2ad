//! Command-line interface for replay_tictactoe.

use clap::{Parser, Subcommand, ValueEnum};
use replay_core::HistoryOrder;
use std::path::PathBuf;

/// Replay Tic-Tac-Toe - tic-tac-toe with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "replay_tictactoe")]
#[command(about = "Tic-tac-toe with jump-back move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Initial move list order (ascending or descending)
        #[arg(long)]
        order: Option<HistoryOrder>,
    },

    /// Apply a list of moves and print the resulting view
    Replay {
        /// Flat cell indices 0-8, applied in order
        moves: Vec<usize>,

        /// Jump to this step after applying the moves
        #[arg(long)]
        jump: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Move list order (ascending or descending)
        #[arg(long)]
        order: Option<HistoryOrder>,

        /// Omit row and column numbers in text output
        #[arg(long)]
        no_headers: bool,
    },
}

/// How `replay` prints the view
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Text board, status and move list
    #[default]
    Text,
    /// The full view as JSON
    Json,
}
