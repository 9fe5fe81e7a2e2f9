//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for the session:
//! help, transcript, attachment annotation, clearing, and exit.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Show the conversation transcript so far.
    History,
    /// Erase the conversation and start a fresh session.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Send a message with an attached file name annotation.
    Attach { file: String, text: String },
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim().to_string());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/history" => Some(ChatCommand::History),
        "/clear" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/attach" => {
            let Some(arg) = arg.filter(|a| !a.is_empty()) else {
                return Some(ChatCommand::Unknown(
                    "/attach requires a file name".to_string(),
                ));
            };
            let mut pieces = arg.splitn(2, ' ');
            let file = pieces.next().unwrap_or_default().to_string();
            let text = pieces.next().unwrap_or_default().trim().to_string();
            Some(ChatCommand::Attach { file, text })
        }
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}     {}", style("/help").cyan(), "Show this help message");
    println!(
        "  {}  {}",
        style("/history").cyan(),
        "Show the conversation so far"
    );
    println!(
        "  {}    {}",
        style("/clear").cyan(),
        "Erase the conversation and start fresh"
    );
    println!("  {}     {}", style("/exit").cyan(), "End the chat session");
    println!(
        "  {}   {}",
        style("/attach").cyan(),
        "Attach a file name: /attach report.pdf summarize this"
    );
    println!();
    println!(
        "  {}",
        style("Only the file name travels with the message, never its bytes.").dim()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_clear_and_history() {
        assert_eq!(parse("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse("/history"), Some(ChatCommand::History));
    }

    #[test]
    fn test_parse_attach_with_text() {
        assert_eq!(
            parse("/attach report.pdf summarize this for me"),
            Some(ChatCommand::Attach {
                file: "report.pdf".to_string(),
                text: "summarize this for me".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_attach_file_only() {
        assert_eq!(
            parse("/attach report.pdf"),
            Some(ChatCommand::Attach {
                file: "report.pdf".to_string(),
                text: String::new(),
            })
        );
    }

    #[test]
    fn test_parse_attach_without_file() {
        assert!(matches!(parse("/attach"), Some(ChatCommand::Unknown(_))));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("hello world"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse("/foo"),
            Some(ChatCommand::Unknown("/foo".to_string()))
        );
    }
}
