//! Command-line interface for the tictactoe driver.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on one terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading one command per line from stdin
    Play {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Append audit entries as JSON lines to this file
        #[arg(long)]
        audit_log: Option<PathBuf>,

        /// Emit audit entries as tracing events
        #[arg(long)]
        trace_audit: bool,

        /// Print accessible cell labels under the board
        #[arg(long)]
        show_cell_labels: bool,
    },

    /// Play a fixed sequence of cells and print the final position
    Replay {
        /// Cells to select, as indices (0-8) or labels such as "center"
        #[arg(required = true, allow_hyphen_values = true)]
        cells: Vec<String>,
    },
}
