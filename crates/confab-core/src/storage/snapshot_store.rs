//! SnapshotStore trait definition.
//!
//! The persistence port for the single conversation snapshot.
//! Implementations live in confab-infra (e.g., `JsonSnapshotStore`).

use confab_types::chat::ConversationSnapshot;
use confab_types::error::StoreError;

/// Port for durable storage of the conversation snapshot.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). The caller
/// must interpret three distinct load outcomes: `Ok(None)` when nothing is
/// stored, `Ok(Some)` when a well-formed snapshot exists, and `Err` when
/// stored content is unreadable or unparseable. The session manager treats
/// `Err` identically to absent, plus a diagnostic log.
pub trait SnapshotStore: Send + Sync {
    /// Read the stored snapshot, if any.
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<ConversationSnapshot>, StoreError>> + Send;

    /// Overwrite the stored snapshot with the given one.
    fn save(
        &self,
        snapshot: &ConversationSnapshot,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Remove the stored snapshot. Absent is not an error.
    fn clear(&self) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
