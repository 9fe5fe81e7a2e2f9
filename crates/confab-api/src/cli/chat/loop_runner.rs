//! Main chat loop orchestration.
//!
//! Coordinates the conversation lifecycle at the terminal: welcome banner,
//! transcript replay for a resumed conversation, the input loop with a
//! typing spinner while a reply is pending, slash commands, and the
//! clear confirmation.

use std::io::Write;
use std::time::Duration;

use console::style;
use tokio::io::AsyncBufReadExt;

use confab_core::chat::manager::SendOutcome;

use crate::state::{AppState, ConcreteSessionManager};

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::renderer::{print_message, print_transcript};

/// Run the interactive chat loop.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let manager = &state.manager;

    let session_id = manager.session_id().await;
    let messages = manager.messages().await;
    print_welcome_banner(
        &state.endpoint_url,
        &state.data_dir,
        &session_id,
        messages.len(),
    );

    // Replay the restored transcript so a resumed conversation shows its
    // context before the first prompt.
    for message in &messages {
        print_message(message);
    }
    println!();

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("  {} ", style("You >").green().bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!("\n  {}", style("Session ended.").dim());
            break;
        };
        let text = line.trim().to_string();
        if text.is_empty() {
            continue;
        }

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => {
                    commands::print_help();
                }
                ChatCommand::History => {
                    print_transcript(&manager.messages().await);
                }
                ChatCommand::Clear => {
                    let confirmed = dialoguer::Confirm::new()
                        .with_prompt("Erase the conversation and start a new session?")
                        .default(false)
                        .interact()?;
                    if confirmed {
                        manager.clear().await;
                        let new_session = manager.session_id().await;
                        println!(
                            "\n  {} Conversation cleared. New session: {}\n",
                            style("*").cyan().bold(),
                            style(&new_session[..8.min(new_session.len())]).dim()
                        );
                        print_transcript(&manager.messages().await);
                    }
                }
                ChatCommand::Exit => {
                    println!("\n  {}", style("Session ended.").dim());
                    break;
                }
                ChatCommand::Attach { file, text } => {
                    send_turn(manager, &text, Some(&file)).await;
                }
                ChatCommand::Unknown(name) => {
                    println!(
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(name).dim()
                    );
                }
            }
            continue;
        }

        send_turn(manager, &text, None).await;
    }

    Ok(())
}

/// Send one turn and render its outcome.
///
/// A spinner stands in for the pending placeholder while the reply is in
/// flight; the finalized assistant message (reply or apology) prints once
/// the turn completes.
async fn send_turn(manager: &ConcreteSessionManager, text: &str, attachment: Option<&str>) {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .expect("static spinner template"),
    );
    spinner.set_message("assistant is typing...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let outcome = manager.send(text, attachment).await;
    spinner.finish_and_clear();

    match outcome {
        SendOutcome::Sent => {
            if let Some(last) = manager.messages().await.last() {
                println!();
                print_message(last);
                println!();
            }
        }
        SendOutcome::Ignored => {}
        SendOutcome::Busy => {
            println!(
                "\n  {} A reply is still pending -- wait for it to finish.\n",
                style("!").yellow().bold()
            );
        }
    }
}
