use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("{message}")]
    StoreUnavailable { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl DomainError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Whether the caller gets a structured response for this error.
    ///
    /// Write-path failures are deliberately left unhandled so they surface
    /// to the invocation environment.
    pub fn is_recognized(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. }
                | Self::NotFound { .. }
                | Self::Conflict { .. }
                | Self::StoreUnavailable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let error = DomainError::invalid_argument("Invalid status specified.");
        assert_eq!(error.to_string(), "Invalid status specified.");
    }

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Unit not found.");
        assert_eq!(error.to_string(), "Unit not found.");
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("registry changed during update");
        assert_eq!(error.to_string(), "Conflict: registry changed during update");
    }

    #[test]
    fn test_recognized_errors() {
        assert!(DomainError::invalid_argument("x").is_recognized());
        assert!(DomainError::not_found("x").is_recognized());
        assert!(DomainError::conflict("x").is_recognized());
        assert!(DomainError::store_unavailable("x").is_recognized());
        assert!(!DomainError::storage("x").is_recognized());
        assert!(!DomainError::serialization("x").is_recognized());
    }
}
