//! Conversation events published by the session manager.
//!
//! One event per state transition, so a renderer can re-draw after each
//! step of a turn -- in particular while the pending placeholder is the
//! newest message and the reply is still in flight.

use serde::{Deserialize, Serialize};

/// Events emitted by the session manager after each state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationEvent {
    /// A snapshot was restored (or freshly created) during initialization.
    Restored { message_count: usize },

    /// The user's message was appended to the list.
    UserMessageAppended { message_id: String },

    /// The pending assistant placeholder was appended; a reply is in flight.
    PlaceholderAppended { placeholder_id: String },

    /// The placeholder was replaced by the finalized assistant message.
    PlaceholderReplaced { message_id: String },

    /// The conversation was erased and a fresh session started.
    Cleared { session_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_tagging() {
        let event = ConversationEvent::PlaceholderAppended {
            placeholder_id: "p1".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"placeholder_appended\""));
        let parsed: ConversationEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
