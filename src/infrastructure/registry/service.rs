//! Registry service: status queries and transitions over the registry document

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::config::{ReadFailurePolicy, RegistryConfig};
use crate::domain::storage::{BlobStore, BlobVersion, WritePrecondition};
use crate::domain::storage_unit::{Registry, StatusChange, StorageUnit, UnitStatus};
use crate::domain::{DomainError, RegistryRequest};

pub const INVALID_STATUS_MESSAGE: &str = "Invalid status specified.";
pub const INVALID_STATUS_CHANGE_MESSAGE: &str = "Invalid status change.";
pub const UNIT_NOT_FOUND_MESSAGE: &str = "Unit not found.";
pub const STORE_UNAVAILABLE_MESSAGE: &str = "Storage units are unavailable.";

/// Result of a dispatched request
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryOutcome {
    Units(Vec<StorageUnit>),
    StatusChanged(StatusChange),
}

/// Registry as read from the store, with what is needed to write it back safely
#[derive(Debug)]
struct LoadedRegistry {
    registry: Registry,
    version: Option<BlobVersion>,
    exists: bool,
}

/// Service answering status queries and applying status transitions.
///
/// The registry is fetched fresh on every call and written back whole after
/// every successful transition. Nothing is cached between calls.
pub struct RegistryService {
    store: Arc<dyn BlobStore>,
    config: RegistryConfig,
}

impl std::fmt::Debug for RegistryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RegistryService {
    pub fn new(store: Arc<dyn BlobStore>, config: RegistryConfig) -> Self {
        Self { store, config }
    }

    /// Route a request to its operation
    pub async fn dispatch(&self, request: RegistryRequest) -> Result<RegistryOutcome, DomainError> {
        debug!(action = request.action(), "Dispatching registry request");

        match request {
            RegistryRequest::ListStorages { status } => {
                self.list_storages(&status).await.map(RegistryOutcome::Units)
            }
            RegistryRequest::UpdateStatus {
                unit_id,
                new_status,
            } => self
                .update_unit_status(&unit_id, &new_status)
                .await
                .map(RegistryOutcome::StatusChanged),
        }
    }

    /// Units whose status equals `status`, in registry order
    pub async fn list_storages(&self, status: &str) -> Result<Vec<StorageUnit>, DomainError> {
        let status: UnitStatus = status
            .parse()
            .map_err(|_| DomainError::invalid_argument(INVALID_STATUS_MESSAGE))?;

        let loaded = self.load().await?;
        let units = loaded.registry.with_status(status);

        debug!(status = %status, matched = units.len(), total = loaded.registry.len(), "Listed storage units");
        Ok(units)
    }

    /// Move the first unit with `unit_id` to `new_status` and persist the registry
    pub async fn update_unit_status(
        &self,
        unit_id: &str,
        new_status: &str,
    ) -> Result<StatusChange, DomainError> {
        let status: UnitStatus = new_status
            .parse()
            .map_err(|_| DomainError::invalid_argument(INVALID_STATUS_CHANGE_MESSAGE))?;

        let max_attempts = self.config.write_mode.max_attempts();
        let mut attempt = 1;

        loop {
            let mut loaded = self.load().await?;

            let change = loaded
                .registry
                .set_status(unit_id, status)
                .ok_or_else(|| DomainError::not_found(UNIT_NOT_FOUND_MESSAGE))?;

            let bytes = loaded.registry.to_json()?;
            let precondition = self.precondition(&loaded);

            match self.store.put(&self.config.key, bytes.into(), precondition).await {
                Ok(_) => {
                    info!(
                        unit_id = %change.unit_id,
                        from = %change.previous_status,
                        to = %change.new_status,
                        "Storage unit status changed"
                    );
                    return Ok(change);
                }
                Err(DomainError::Conflict { message }) if attempt < max_attempts => {
                    warn!(unit_id = %unit_id, attempt, %message, "Registry changed during update, retrying");
                    attempt += 1;
                }
                Err(DomainError::Conflict { message }) => {
                    return Err(DomainError::conflict(format!(
                        "Registry update for unit '{}' abandoned after {} attempts: {}",
                        unit_id, attempt, message
                    )));
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Read the registry ignoring the read-failure policy, for readiness checks
    pub async fn probe(&self) -> Result<usize, DomainError> {
        match self.store.get(&self.config.key).await? {
            Some(blob) => Ok(Registry::from_json(&blob.bytes)?.len()),
            None => Ok(0),
        }
    }

    async fn load(&self) -> Result<LoadedRegistry, DomainError> {
        let blob = match self.store.get(&self.config.key).await {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                debug!(key = %self.config.key, "Registry document missing, using empty registry");
                return Ok(LoadedRegistry {
                    registry: Registry::empty(),
                    version: None,
                    exists: false,
                });
            }
            Err(e) => return self.on_read_failure(e),
        };

        match Registry::from_json(&blob.bytes) {
            Ok(registry) => Ok(LoadedRegistry {
                registry,
                version: blob.version,
                exists: true,
            }),
            Err(e) => self.on_read_failure(e),
        }
    }

    fn on_read_failure(&self, error: DomainError) -> Result<LoadedRegistry, DomainError> {
        match self.config.read_failure {
            ReadFailurePolicy::TreatAsEmpty => {
                warn!(key = %self.config.key, error = %error, "Error retrieving storage units, treating registry as empty");
                Ok(LoadedRegistry {
                    registry: Registry::empty(),
                    version: None,
                    exists: false,
                })
            }
            ReadFailurePolicy::Propagate => {
                warn!(key = %self.config.key, error = %error, "Error retrieving storage units");
                Err(DomainError::store_unavailable(STORE_UNAVAILABLE_MESSAGE))
            }
        }
    }

    fn precondition(&self, loaded: &LoadedRegistry) -> WritePrecondition {
        if !self.config.write_mode.is_conditional() {
            return WritePrecondition::None;
        }

        match (&loaded.version, loaded.exists) {
            (Some(version), _) => WritePrecondition::MatchVersion(version.clone()),
            (None, false) => WritePrecondition::MustNotExist,
            (None, true) => WritePrecondition::None,
        }
    }
}
