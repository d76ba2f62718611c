//! Domain layer - Core business logic and types

pub mod error;
pub mod request;
pub mod storage;
pub mod storage_unit;

pub use error::DomainError;
pub use request::RegistryRequest;
pub use storage::{BlobStore, BlobVersion, StoredBlob, WritePrecondition};
pub use storage_unit::{Registry, StatusChange, StorageUnit, UnitStatus};
