//! Blob store factory for runtime backend selection

use std::str::FromStr;
use std::sync::Arc;

use tracing::info;

use crate::domain::storage::BlobStore;

use super::in_memory::InMemoryBlobStore;
use super::s3::{S3BlobStore, S3Config};

/// Supported blob store backends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory store (for testing/development)
    InMemory,
    /// Amazon S3 or an S3-compatible service
    S3,
}

impl FromStr for StorageType {
    type Err = UnknownStorageType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Ok(Self::InMemory),
            "s3" | "aws" | "minio" => Ok(Self::S3),
            _ => Err(UnknownStorageType(s.to_string())),
        }
    }
}

/// Error returned for a backend name no store implements
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown store backend '{0}'")]
pub struct UnknownStorageType(pub String);

/// Blob store configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory store configuration
    InMemory,
    /// S3 store configuration
    S3(S3Config),
}

impl StorageConfig {
    /// Creates an in-memory store configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Creates an S3 store configuration
    pub fn s3(config: S3Config) -> Self {
        Self::S3(config)
    }

    /// Returns the storage type
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::S3(_) => StorageType::S3,
        }
    }
}

/// Factory for creating blob store instances
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates a blob store based on the configuration
    pub async fn create(config: &StorageConfig) -> Arc<dyn BlobStore> {
        match config {
            StorageConfig::InMemory => {
                info!("Using in-memory blob store");
                Arc::new(InMemoryBlobStore::new())
            }
            StorageConfig::S3(s3_config) => {
                info!(bucket = %s3_config.bucket, "Using S3 blob store");
                Arc::new(S3BlobStore::connect(s3_config).await)
            }
        }
    }
}
