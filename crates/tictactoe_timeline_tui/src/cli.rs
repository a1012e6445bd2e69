//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_timeline::Action;

/// Tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with a browsable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of discarding them
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply actions to a new game and print the result
    Replay {
        /// Actions in order: a cell 0-8 places a mark, @N jumps to step N
        #[arg(required = true)]
        actions: Vec<Action>,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,

        /// Fail on the first illegal action instead of ignoring it
        #[arg(long)]
        strict: bool,
    },
}
