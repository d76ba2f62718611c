//! Storage infrastructure - Blob store implementations

mod factory;
mod in_memory;
mod s3;

pub use factory::{StorageConfig, StorageFactory, StorageType, UnknownStorageType};
pub use in_memory::InMemoryBlobStore;
pub use s3::{S3BlobStore, S3Config};
