//! Blob store trait definition

use async_trait::async_trait;
use bytes::Bytes;

#[cfg(test)]
use mockall::automock;

use crate::domain::DomainError;

use super::entity::{BlobVersion, StoredBlob, WritePrecondition};

/// Key-value object store holding whole documents
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Reads the object at `key`. Returns `Ok(None)` when it does not exist.
    async fn get(&self, key: &str) -> Result<Option<StoredBlob>, DomainError>;

    /// Overwrites the object at `key` wholesale.
    ///
    /// A failed precondition is reported as [`DomainError::Conflict`].
    async fn put(
        &self,
        key: &str,
        bytes: Bytes,
        precondition: WritePrecondition,
    ) -> Result<Option<BlobVersion>, DomainError>;
}
