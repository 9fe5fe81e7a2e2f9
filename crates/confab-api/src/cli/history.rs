//! Transcript printout for the `confab history` command.

use console::style;

use crate::cli::chat::renderer::print_message;
use crate::state::AppState;

/// Print the persisted conversation transcript.
///
/// With `--json`, emits the full snapshot (messages plus identifiers) as
/// machine-readable JSON; otherwise a styled transcript, optionally limited
/// to the most recent `limit` messages.
pub async fn show_history(
    state: &AppState,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let snapshot = state.manager.snapshot().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let skip = limit.map_or(0, |n| snapshot.messages.len().saturating_sub(n));

    println!();
    println!(
        "  {} {}",
        style("Session:").bold(),
        style(&snapshot.session_id).dim()
    );
    if let Some(chat_id) = &snapshot.chat_id {
        println!("  {} {}", style("Thread:").bold(), style(chat_id).dim());
    }
    println!();
    for message in &snapshot.messages[skip..] {
        print_message(message);
    }
    println!();

    Ok(())
}
