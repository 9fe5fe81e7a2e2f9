//! Conversation message and snapshot types for Confab.
//!
//! These types model one conversation between the user and the remote
//! assistant: the ordered message list plus the identifiers that tie the
//! conversation to the remote service's bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Role of a message within a conversation.
///
/// Deliberately closed to the two roles the conversation can contain;
/// the remote service never contributes system messages to the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message within a conversation.
///
/// `timestamp` is used for display ordering and formatting only; list
/// position is what defines conversation order. `is_pending` is true only
/// for the transient assistant placeholder that stands in for a reply
/// still in flight -- never for a finalized message.
///
/// Field names serialize camelCase because the snapshot is a fixed external
/// shape shared with the stored conversation file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub role: MessageRole,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_pending: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// The full persisted state of one conversation.
///
/// `session_id` is minted locally for a fresh conversation and may be
/// overwritten by a newer value the remote service returns. `chat_id` is
/// issued by the remote service on the first successful reply and sent back
/// on every subsequent request so the service can retrieve prior turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSnapshot {
    pub messages: Vec<Message>,
    pub session_id: String,
    #[serde(default)]
    pub chat_id: Option<String>,
}

impl ConversationSnapshot {
    /// Whether the message list currently holds a pending placeholder.
    pub fn has_pending(&self) -> bool {
        self.messages.iter().any(|m| m.is_pending)
    }
}
