use thiserror::Error;

/// Errors from snapshot store operations (used by the trait definition in
/// confab-core).
///
/// The session manager treats every variant the same way on load -- discard
/// and start fresh -- but the split keeps diagnostics honest: a malformed
/// snapshot is a different event than an unreadable disk.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot: {0}")]
    Malformed(String),
}
