//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_tictactoe::Board;

/// Strictly Minimax - perfect-play tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Evaluate tic-tac-toe boards and play against minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report whether a board is won, tied or in progress
    Evaluate {
        /// Nine cells in row-major order, e.g. "XX.OO...." (X, O, or . for empty)
        board: Board,
    },

    /// Find the best move for the side to play
    Search {
        /// Nine cells in row-major order, e.g. "XX.OO...."
        board: Board,

        /// Search for X (minimizing) instead of O (maximizing)
        #[arg(long)]
        minimizing: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play against the engine (you are X and move first)
    Play {
        /// Path to a TOML play config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}
