//! Message rendering for the terminal.

use chrono::Local;
use console::style;

use confab_types::chat::{Message, MessageRole};

/// Print one message as a transcript line.
///
/// Pending placeholders render as a typing indicator; finalized messages
/// carry a local-time stamp.
pub fn print_message(message: &Message) {
    let label = match message.role {
        MessageRole::User => style("You").green().bold(),
        MessageRole::Assistant => style("Assistant").cyan().bold(),
    };

    if message.is_pending {
        println!("  {} {}", label, style("typing...").dim());
        return;
    }

    let when = message.timestamp.with_timezone(&Local).format("%H:%M");
    println!(
        "  {} {}  {}",
        label,
        style(format!("[{when}]")).dim(),
        message.content
    );
}

/// Print a full transcript with surrounding blank lines.
pub fn print_transcript(messages: &[Message]) {
    println!();
    for message in messages {
        print_message(message);
    }
    println!();
}
