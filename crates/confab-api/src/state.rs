//! Application state wiring the core to its infrastructure.
//!
//! The session manager is generic over the store and client ports;
//! AppState pins it to the concrete infra implementations and restores the
//! persisted conversation before any command runs.

use std::path::PathBuf;

use confab_core::chat::manager::ChatSessionManager;
use confab_infra::config::load_global_config;
use confab_infra::filesystem::resolve_data_dir;
use confab_infra::filesystem::snapshot::JsonSnapshotStore;
use confab_infra::remote::prediction::PredictionClient;

/// Concrete type alias for the session manager pinned to infra.
pub type ConcreteSessionManager = ChatSessionManager<JsonSnapshotStore, PredictionClient>;

/// Shared application state used by every CLI command.
pub struct AppState {
    pub manager: ConcreteSessionManager,
    pub data_dir: PathBuf,
    pub endpoint_url: String,
}

impl AppState {
    /// Initialize the application state: resolve the data directory, load
    /// config, wire the ports, and restore the conversation.
    pub async fn init(
        data_dir: Option<PathBuf>,
        endpoint: Option<String>,
    ) -> anyhow::Result<Self> {
        let data_dir = data_dir.unwrap_or_else(resolve_data_dir);

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;
        let endpoint_url = endpoint.unwrap_or(config.endpoint_url);

        let store = JsonSnapshotStore::new(&data_dir);
        let client = PredictionClient::new(&endpoint_url);
        let manager = ChatSessionManager::new(store, client);
        manager.initialize().await;

        Ok(Self {
            manager,
            data_dir,
            endpoint_url,
        })
    }
}
