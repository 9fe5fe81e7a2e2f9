//! JSON-file implementation of `SnapshotStore`.
//!
//! The whole conversation lives in a single `conversation.json` inside the
//! data directory -- the client's stand-in for an origin-scoped key-value
//! slot. Each save overwrites the file whole; writes are small and there is
//! only one writer, so nothing fancier is warranted.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use confab_core::storage::snapshot_store::SnapshotStore;
use confab_types::chat::ConversationSnapshot;
use confab_types::error::StoreError;

/// File name of the stored snapshot inside the data directory.
pub const SNAPSHOT_FILE: &str = "conversation.json";

/// Snapshot store backed by one JSON file.
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Create a store rooted at the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join(SNAPSHOT_FILE),
        }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    async fn load(&self) -> Result<Option<ConversationSnapshot>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let snapshot = serde_json::from_str(&content)
            .map_err(|err| StoreError::Malformed(err.to_string()))?;
        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &ConversationSnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|err| StoreError::Malformed(err.to_string()))?;

        // Write-then-rename so a crash mid-write never leaves a
        // half-written snapshot behind.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), "conversation snapshot written");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
