//! Conversation session manager.
//!
//! Single source of truth for conversation state: the message list, the
//! locally minted session identifier, and the server-issued chat
//! identifier. Orchestrates the send flow -- append the user message,
//! append a pending placeholder, query the remote service, replace the
//! placeholder with the finalized reply -- and persists the snapshot after
//! every change. Publishes a [`ConversationEvent`] after each transition so
//! a renderer can re-draw before the next step proceeds.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use confab_types::chat::{ConversationSnapshot, Message, MessageRole};
use confab_types::event::ConversationEvent;

use crate::chat::token::generate_token;
use crate::event::bus::EventBus;
use crate::remote::client::ConversationClient;
use crate::storage::snapshot_store::SnapshotStore;

/// Greeting shown as the only message of a fresh conversation.
const WELCOME_MESSAGE: &str = "Hello! I'm your assistant. Ask me anything -- \
I'll keep the conversation around between visits.";

/// Fixed id of the welcome message. Never collides with generated tokens.
const WELCOME_ID: &str = "welcome";

/// Result of a [`ChatSessionManager::send`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The turn ran to completion (reply or synthesized failure appended).
    Sent,
    /// Blank input with no attachment; nothing happened.
    Ignored,
    /// A reply is already pending; the call was rejected at entry.
    Busy,
}

/// Orchestrates one conversation against a snapshot store and a remote
/// conversation client.
///
/// Generic over both ports so tests can substitute an in-memory store and a
/// scripted client. State lives behind an async `RwLock`; the in-flight
/// flag rejects a second `send` at the operation entry. That guard is
/// cooperative -- the UI is expected to disable its send affordance while a
/// reply is pending -- but it is what keeps the "at most one pending
/// placeholder" invariant intact if the expectation is bypassed.
pub struct ChatSessionManager<S: SnapshotStore, C: ConversationClient> {
    store: S,
    client: C,
    state: RwLock<ConversationSnapshot>,
    in_flight: AtomicBool,
    events: EventBus,
}

impl<S: SnapshotStore, C: ConversationClient> ChatSessionManager<S, C> {
    /// Create a manager over the given ports.
    ///
    /// The manager starts with a fresh snapshot; call [`initialize`] to
    /// restore persisted state before first use.
    ///
    /// [`initialize`]: ChatSessionManager::initialize
    pub fn new(store: S, client: C) -> Self {
        Self {
            store,
            client,
            state: RwLock::new(Self::fresh_snapshot()),
            in_flight: AtomicBool::new(false),
            events: EventBus::new(64),
        }
    }

    /// Build an empty conversation: one welcome message, a freshly minted
    /// session identifier, no chat identifier yet.
    fn fresh_snapshot() -> ConversationSnapshot {
        ConversationSnapshot {
            messages: vec![Message {
                id: WELCOME_ID.to_string(),
                content: WELCOME_MESSAGE.to_string(),
                role: MessageRole::Assistant,
                timestamp: Utc::now(),
                is_pending: false,
            }],
            session_id: generate_token(),
            chat_id: None,
        }
    }

    /// Restore the persisted conversation, or start fresh.
    ///
    /// A well-formed snapshot is restored verbatim. An absent snapshot and
    /// an unreadable or unparseable one both yield the fresh-welcome state;
    /// corruption is logged for diagnostics and never surfaced to the
    /// caller. The conversation is never left empty.
    pub async fn initialize(&self) {
        let restored = match self.store.load().await {
            Ok(Some(snapshot)) => {
                debug!(
                    messages = snapshot.messages.len(),
                    "restored persisted conversation"
                );
                Some(snapshot)
            }
            Ok(None) => {
                debug!("no persisted conversation, starting fresh");
                None
            }
            Err(err) => {
                warn!(error = %err, "discarding unusable conversation snapshot");
                None
            }
        };

        let snapshot = restored.unwrap_or_else(Self::fresh_snapshot);
        let message_count = snapshot.messages.len();
        *self.state.write().await = snapshot;

        self.events
            .publish(ConversationEvent::Restored { message_count });
        self.persist().await;
    }

    /// Send one user turn through the remote service.
    ///
    /// Blank text with no attachment is silently ignored; a call while a
    /// reply is pending is rejected at entry. Otherwise the full turn runs
    /// to completion: the user message and a pending placeholder are
    /// appended (each immediately visible to readers and announced on the
    /// bus), the remote client is queried once, and the placeholder is
    /// replaced by the finalized assistant message -- the real reply or the
    /// client's synthesized failure reply. Identifiers returned by the
    /// service always override the locally held ones; that adoption is how
    /// thread continuity is established after the first turn.
    pub async fn send(&self, text: &str, attachment: Option<&str>) -> SendOutcome {
        if text.trim().is_empty() && attachment.is_none() {
            return SendOutcome::Ignored;
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("send rejected: a reply is already pending");
            return SendOutcome::Busy;
        }

        let mut content = text.to_string();
        if let Some(name) = attachment {
            // The file's bytes are never transmitted; only the name rides
            // along as a human-readable annotation.
            content.push_str(&format!("\n[Attached file: {name}]"));
        }

        let user_id = generate_token();
        let placeholder_id = format!("{user_id}-pending");

        let (chat_id, session_id) = {
            let mut state = self.state.write().await;
            state.messages.push(Message {
                id: user_id.clone(),
                content: content.clone(),
                role: MessageRole::User,
                timestamp: Utc::now(),
                is_pending: false,
            });
            (state.chat_id.clone(), state.session_id.clone())
        };
        self.events.publish(ConversationEvent::UserMessageAppended {
            message_id: user_id,
        });

        {
            let mut state = self.state.write().await;
            state.messages.push(Message {
                id: placeholder_id.clone(),
                content: String::new(),
                role: MessageRole::Assistant,
                timestamp: Utc::now(),
                is_pending: true,
            });
        }
        self.events.publish(ConversationEvent::PlaceholderAppended {
            placeholder_id: placeholder_id.clone(),
        });
        self.persist().await;

        // The one suspension point of a turn. No timeout beyond the
        // transport's own, no retry, no cancellation: the request runs to
        // completion (or synthesized failure) before the next send.
        let reply = self
            .client
            .query(&content, chat_id.as_deref(), &session_id)
            .await;

        let final_id = {
            let mut state = self.state.write().await;
            state.messages.retain(|m| m.id != placeholder_id);

            let final_id = if reply.chat_message_id.is_empty() {
                generate_token()
            } else {
                reply.chat_message_id.clone()
            };
            state.messages.push(Message {
                id: final_id.clone(),
                content: reply.text.clone(),
                role: MessageRole::Assistant,
                timestamp: Utc::now(),
                is_pending: false,
            });

            // Empty identifiers mean the service sent none.
            if !reply.chat_id.is_empty() {
                state.chat_id = Some(reply.chat_id.clone());
            }
            if !reply.session_id.is_empty() {
                state.session_id = reply.session_id.clone();
            }
            final_id
        };
        self.in_flight.store(false, Ordering::SeqCst);

        self.events.publish(ConversationEvent::PlaceholderReplaced {
            message_id: final_id,
        });
        self.persist().await;

        SendOutcome::Sent
    }

    /// Erase the conversation and start a fresh session.
    ///
    /// Removes the persisted snapshot, discards the chat identifier,
    /// regenerates the session identifier, and reinstates the welcome
    /// message. Irreversible; confirmation belongs at the presentation
    /// boundary.
    pub async fn clear(&self) {
        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "failed to remove persisted conversation");
        }

        let fresh = Self::fresh_snapshot();
        let session_id = fresh.session_id.clone();
        *self.state.write().await = fresh;

        info!(session_id = %session_id, "conversation cleared");
        self.events
            .publish(ConversationEvent::Cleared { session_id });
        self.persist().await;
    }

    /// Write the current snapshot through the store.
    ///
    /// Store failures are logged and swallowed: the in-memory conversation
    /// stays authoritative and usable.
    async fn persist(&self) {
        let snapshot = self.state.read().await.clone();
        if let Err(err) = self.store.save(&snapshot).await {
            warn!(error = %err, "failed to persist conversation snapshot");
        }
    }

    /// Current message list, in conversation order.
    pub async fn messages(&self) -> Vec<Message> {
        self.state.read().await.messages.clone()
    }

    /// Full copy of the current conversation state.
    pub async fn snapshot(&self) -> ConversationSnapshot {
        self.state.read().await.clone()
    }

    /// Whether a reply is currently pending.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Current session identifier.
    pub async fn session_id(&self) -> String {
        self.state.read().await.session_id.clone()
    }

    /// Current chat identifier, if the service has issued one.
    pub async fn chat_id(&self) -> Option<String> {
        self.state.read().await.chat_id.clone()
    }

    /// Subscribe to conversation state-change events.
    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.events.subscribe()
    }
}
