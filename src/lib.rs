//! Storage Unit Registry
//!
//! Tracks the status of storage units kept in a single JSON document in an
//! object store:
//! - Status-filtered listing of units
//! - Single-unit status transitions persisted as a whole-document write
//! - Action-dispatched invocation envelope and a REST surface

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use tracing::info;

use api::state::AppState;
use infrastructure::storage::StorageFactory;

/// Create the application state from configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = config.store.storage_config()?;
    let registry_config = config.store.registry_config();

    info!(
        backend = ?storage_config.storage_type(),
        key = %registry_config.key,
        read_failure = ?registry_config.read_failure,
        write_mode = ?registry_config.write_mode,
        "Configuring registry store"
    );

    let store = StorageFactory::create(&storage_config).await;
    Ok(AppState::from_store(store, registry_config))
}
