//! Confab CLI entry point.
//!
//! Binary name: `confab`
//!
//! Parses CLI arguments, wires the snapshot store and prediction client
//! into the session manager, then dispatches to the requested command.

mod cli;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,confab=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let state = AppState::init(cli.data_dir.clone(), cli.endpoint.clone()).await?;

    match cli.command {
        Commands::Chat => {
            cli::chat::loop_runner::run_chat_loop(&state).await?;
        }
        Commands::History { limit } => {
            cli::history::show_history(&state, limit, cli.json).await?;
        }
        Commands::Clear { force } => {
            cli::session::clear_conversation(&state, force, cli.json).await?;
        }
    }

    Ok(())
}
