//! The `confab clear` command.

use console::style;

use crate::state::AppState;

/// Erase the conversation and start a fresh session.
///
/// Irreversible, so a confirmation prompt guards it unless `--force` is
/// passed (the `--json` output is intended for scripts, which pass
/// `--force` themselves).
pub async fn clear_conversation(state: &AppState, force: bool, json: bool) -> anyhow::Result<()> {
    if !force {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt("Erase the conversation and start a new session?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("  {}", style("Aborted.").dim());
            return Ok(());
        }
    }

    let previous = state.manager.session_id().await;
    state.manager.clear().await;
    let current = state.manager.session_id().await;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "cleared": true,
                "previousSessionId": previous,
                "sessionId": current,
            })
        );
    } else {
        println!();
        println!(
            "  {} Conversation cleared. New session: {}",
            style("*").cyan().bold(),
            style(&current).dim()
        );
        println!();
    }

    Ok(())
}
