//! Welcome banner display for chat sessions.
//!
//! Prints a styled banner when the chat loop starts, showing the endpoint
//! and session information.

use std::path::Path;

use console::style;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(
    endpoint_url: &str,
    data_dir: &Path,
    session_id: &str,
    message_count: usize,
) {
    println!();
    println!("  {} {}", "*", style("Confab").cyan().bold());
    println!(
        "  {}",
        style("Local-first chat -- your conversation survives restarts.").dim()
    );
    println!();
    println!(
        "  {}  {}",
        style("Endpoint:").bold(),
        style(endpoint_url).dim()
    );
    println!(
        "  {}  {}",
        style("Storage:").bold(),
        style(data_dir.display()).dim()
    );
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    if message_count > 1 {
        println!(
            "  {}  {}",
            style("Resumed:").bold(),
            style(format!("{message_count} messages")).dim()
        );
    }
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
