//! Storage domain - Blob store abstraction layer

mod entity;
mod repository;

pub use entity::{BlobVersion, StoredBlob, WritePrecondition};
pub use repository::BlobStore;

#[cfg(test)]
pub use repository::MockBlobStore;
