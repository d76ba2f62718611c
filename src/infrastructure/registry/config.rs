//! Registry service configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_REGISTRY_KEY: &str = "storage_units.json";

/// What to do when the registry document cannot be read or decoded
///
/// A missing document is always an empty registry; this only covers
/// transport failures and undecodable contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadFailurePolicy {
    /// Log the failure and continue with an empty registry
    #[default]
    TreatAsEmpty,
    /// Fail the request with `StoreUnavailable`
    Propagate,
}

/// How the registry document is written back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Unconditional overwrite. Concurrent updates can lose writes.
    #[default]
    Overwrite,
    /// Write only if the document is unchanged since it was read,
    /// re-running the whole update on conflict
    Conditional { max_attempts: u32 },
}

impl WriteMode {
    pub fn max_attempts(&self) -> u32 {
        match self {
            Self::Overwrite => 1,
            Self::Conditional { max_attempts } => (*max_attempts).max(1),
        }
    }

    pub fn is_conditional(&self) -> bool {
        matches!(self, Self::Conditional { .. })
    }
}

/// Registry service settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Object key of the registry document
    pub key: String,
    pub read_failure: ReadFailurePolicy,
    pub write_mode: WriteMode,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_REGISTRY_KEY.to_string(),
            read_failure: ReadFailurePolicy::default(),
            write_mode: WriteMode::default(),
        }
    }
}

impl RegistryConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_read_failure(mut self, policy: ReadFailurePolicy) -> Self {
        self.read_failure = policy;
        self
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::default();
        assert_eq!(config.key, "storage_units.json");
        assert_eq!(config.read_failure, ReadFailurePolicy::TreatAsEmpty);
        assert_eq!(config.write_mode, WriteMode::Overwrite);
    }

    #[test]
    fn test_max_attempts() {
        assert_eq!(WriteMode::Overwrite.max_attempts(), 1);
        assert_eq!(WriteMode::Conditional { max_attempts: 5 }.max_attempts(), 5);
        assert_eq!(WriteMode::Conditional { max_attempts: 0 }.max_attempts(), 1);
    }

    #[test]
    fn test_read_failure_policy_deserialization() {
        let policy: ReadFailurePolicy = serde_json::from_str("\"propagate\"").unwrap();
        assert_eq!(policy, ReadFailurePolicy::Propagate);

        let policy: ReadFailurePolicy = serde_json::from_str("\"treat_as_empty\"").unwrap();
        assert_eq!(policy, ReadFailurePolicy::TreatAsEmpty);
    }
}
