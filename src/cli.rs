//! Command-line interface for tally_tictactoe.

use clap::{Parser, Subcommand};

/// Tally Tic-Tac-Toe - play the weighted-tally engine in a terminal
#[derive(Parser, Debug)]
#[command(name = "tally_tictactoe")]
#[command(about = "Tic-tac-toe with constant-time win detection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an engine config TOML (weights and marks)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Print a JSON snapshot of the engine after each step
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively: enter a cell number 1-9, `r` to reset, `q` to quit
    Play,

    /// Apply a comma-separated list of cell numbers (1-9) and print the result
    Replay {
        /// Cell numbers in move order, e.g. 1,4,2,5,3
        #[arg(value_delimiter = ',', required = true)]
        cells: Vec<usize>,
    },

    /// Check that a weight pair can never report a false win
    CheckWeights {
        /// Weight of the first player
        #[arg(long)]
        first: u32,

        /// Weight of the second player
        #[arg(long)]
        second: u32,
    },
}
