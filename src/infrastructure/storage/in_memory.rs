//! In-memory blob store implementation

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::storage::{BlobStore, BlobVersion, StoredBlob, WritePrecondition};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Objects {
    entries: HashMap<String, (Bytes, u64)>,
    next_version: u64,
}

/// Thread-safe in-memory blob store
///
/// Useful for testing and development. Data is lost when the process terminates.
/// Every write bumps a store-wide counter that serves as the object version.
#[derive(Debug, Default)]
pub struct InMemoryBlobStore {
    objects: RwLock<Objects>,
}

impl InMemoryBlobStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one object
    pub fn with_object(self, key: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        if let Ok(mut objects) = self.objects.write() {
            objects.next_version += 1;
            let version = objects.next_version;
            objects.entries.insert(key.into(), (bytes.into(), version));
        }
        self
    }

    /// Current contents of an object, bypassing versioning
    pub fn object(&self, key: &str) -> Option<Bytes> {
        self.objects
            .read()
            .ok()?
            .entries
            .get(key)
            .map(|(bytes, _)| bytes.clone())
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Option<StoredBlob>, DomainError> {
        let objects = self.objects.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(objects.entries.get(key).map(|(bytes, version)| {
            StoredBlob::new(bytes.clone()).with_version(BlobVersion::new(version.to_string()))
        }))
    }

    async fn put(
        &self,
        key: &str,
        bytes: Bytes,
        precondition: WritePrecondition,
    ) -> Result<Option<BlobVersion>, DomainError> {
        let mut objects = self.objects.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let current = objects
            .entries
            .get(key)
            .map(|(_, version)| BlobVersion::new(version.to_string()));

        match (&precondition, &current) {
            (WritePrecondition::None, _) => {}
            (WritePrecondition::MatchVersion(expected), Some(actual)) if expected == actual => {}
            (WritePrecondition::MustNotExist, None) => {}
            _ => {
                return Err(DomainError::conflict(format!(
                    "Object '{}' was modified concurrently",
                    key
                )));
            }
        }

        objects.next_version += 1;
        let version = objects.next_version;
        objects.entries.insert(key.to_string(), (bytes, version));

        Ok(Some(BlobVersion::new(version.to_string())))
    }
}
