//! ConversationClient trait definition.
//!
//! The port through which the session manager asks the remote service for
//! an assistant reply. Implementations live in confab-infra (e.g.,
//! `PredictionClient`).

use confab_types::remote::AssistantReply;

/// Port for the remote conversation service.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
///
/// `query` is infallible at this boundary: an implementation makes at most
/// one network attempt and collapses every failure -- transport, status,
/// malformed payload -- into a synthesized [`AssistantReply`] whose
/// `session_id` echoes the input, so the manager's merge step never sees a
/// missing field. No retries: the protocol has no idempotency key, and a
/// duplicate attempt would risk a duplicate assistant turn server-side.
pub trait ConversationClient: Send + Sync {
    /// Ask the remote service one question, correlated by the current
    /// thread and session identifiers.
    fn query(
        &self,
        question: &str,
        chat_id: Option<&str>,
        session_id: &str,
    ) -> impl std::future::Future<Output = AssistantReply> + Send;
}
