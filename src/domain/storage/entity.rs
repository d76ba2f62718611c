//! Blob storage value types

use bytes::Bytes;

/// Opaque version token of a stored object (an S3 ETag or an in-memory counter)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobVersion(String);

impl BlobVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlobVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Object contents as read from the store
#[derive(Debug, Clone)]
pub struct StoredBlob {
    pub bytes: Bytes,
    /// Version observed at read time, if the backend reports one
    pub version: Option<BlobVersion>,
}

impl StoredBlob {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: BlobVersion) -> Self {
        self.version = Some(version);
        self
    }
}

/// Condition a write must satisfy to be applied
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WritePrecondition {
    /// Unconditional overwrite
    #[default]
    None,
    /// The object must still be at this version
    MatchVersion(BlobVersion),
    /// The object must not exist yet
    MustNotExist,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_version_display() {
        let version = BlobVersion::new("\"abc123\"");
        assert_eq!(version.to_string(), "\"abc123\"");
        assert_eq!(version.as_str(), "\"abc123\"");
    }

    #[test]
    fn test_stored_blob_with_version() {
        let blob = StoredBlob::new("[]").with_version(BlobVersion::new("1"));
        assert_eq!(blob.bytes.as_ref(), b"[]");
        assert_eq!(blob.version, Some(BlobVersion::new("1")));
    }

    #[test]
    fn test_default_precondition_is_unconditional() {
        assert_eq!(WritePrecondition::default(), WritePrecondition::None);
    }
}
