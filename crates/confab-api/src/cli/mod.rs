//! CLI command definitions and dispatch for the `confab` binary.
//!
//! Uses clap derive macros for argument parsing. Three commands: the
//! interactive chat loop, the transcript printout, and the destructive
//! clear.

pub mod chat;
pub mod history;
pub mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Chat with a remote assistant from your terminal.
#[derive(Parser)]
#[command(name = "confab", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Data directory holding the conversation snapshot and config.toml.
    #[arg(long, env = "CONFAB_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Prediction endpoint URL (overrides config.toml).
    #[arg(long, env = "CONFAB_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive chat session.
    Chat,

    /// Print the persisted conversation transcript.
    History {
        /// Maximum number of messages to print (most recent kept).
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Erase the conversation and start a fresh session.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        force: bool,
    },
}
