//! Application state for shared services

use std::sync::Arc;

use crate::domain::BlobStore;
use crate::infrastructure::registry::{RegistryConfig, RegistryService};

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub registry: Arc<RegistryService>,
}

impl AppState {
    pub fn new(registry: Arc<RegistryService>) -> Self {
        Self { registry }
    }

    /// Build state from a blob store handle and registry settings
    pub fn from_store(store: Arc<dyn BlobStore>, config: RegistryConfig) -> Self {
        Self::new(Arc::new(RegistryService::new(store, config)))
    }
}
