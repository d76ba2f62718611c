//! Function-style invocation envelope: `{ "statusCode": ..., "body": "<json>" }`

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::infrastructure::registry::RegistryOutcome;

/// Response returned for every invocation event.
///
/// `body` is itself a JSON document encoded as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn new<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Result<Self, DomainError> {
        let body = serde_json::to_string(body).map_err(|e| {
            DomainError::serialization(format!("Failed to encode response body: {}", e))
        })?;

        Ok(Self {
            status_code: status.as_u16(),
            body,
        })
    }

    pub fn from_outcome(outcome: &RegistryOutcome) -> Result<Self, DomainError> {
        match outcome {
            RegistryOutcome::Units(units) => Self::new(StatusCode::OK, units),
            RegistryOutcome::StatusChanged(change) => {
                Self::new(StatusCode::OK, &change.message())
            }
        }
    }

    /// Structured response for a recognised error.
    ///
    /// Returns the error back when it has no structured form, so the caller
    /// can let it surface as an unhandled failure.
    pub fn from_error(error: DomainError) -> Result<Self, DomainError> {
        if !error.is_recognized() {
            return Err(error);
        }

        let status = match &error {
            DomainError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Conflict { .. } => StatusCode::CONFLICT,
            DomainError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            DomainError::Storage { .. } | DomainError::Serialization { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Self::new(status, &error.to_string())
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
