//! Registry requests and their event encoding

use serde_json::Value;

use crate::domain::DomainError;

pub const INVALID_ACTION_MESSAGE: &str = "Invalid action specified.";

/// A request routed by `action`
///
/// Parameters stay as raw strings here; each operation validates its own
/// inputs so a missing parameter fails the same way as an unknown one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryRequest {
    ListStorages { status: String },
    UpdateStatus { unit_id: String, new_status: String },
}

impl RegistryRequest {
    /// Parse an invocation event
    pub fn from_event(event: &Value) -> Result<Self, DomainError> {
        let action = event.get("action").and_then(Value::as_str);

        match action {
            Some("list_storages") => Ok(Self::ListStorages {
                status: string_param(event, "status"),
            }),
            Some("update_status") => Ok(Self::UpdateStatus {
                unit_id: string_param(event, "unit_id"),
                new_status: string_param(event, "new_status"),
            }),
            _ => Err(DomainError::invalid_argument(INVALID_ACTION_MESSAGE)),
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Self::ListStorages { .. } => "list_storages",
            Self::UpdateStatus { .. } => "update_status",
        }
    }
}

fn string_param(event: &Value, name: &str) -> String {
    event
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_list_storages() {
        let request =
            RegistryRequest::from_event(&json!({"action": "list_storages", "status": "Available"}))
                .unwrap();

        assert_eq!(
            request,
            RegistryRequest::ListStorages {
                status: "Available".to_string()
            }
        );
        assert_eq!(request.action(), "list_storages");
    }

    #[test]
    fn test_parse_update_status() {
        let request = RegistryRequest::from_event(&json!({
            "action": "update_status",
            "unit_id": "B",
            "new_status": "Problem"
        }))
        .unwrap();

        assert_eq!(
            request,
            RegistryRequest::UpdateStatus {
                unit_id: "B".to_string(),
                new_status: "Problem".to_string()
            }
        );
    }

    #[test]
    fn test_missing_params_become_empty() {
        let request = RegistryRequest::from_event(&json!({"action": "list_storages"})).unwrap();
        assert_eq!(
            request,
            RegistryRequest::ListStorages {
                status: String::new()
            }
        );
    }

    #[test]
    fn test_unknown_action_is_invalid_argument() {
        for event in [
            json!({"action": "delete_unit"}),
            json!({"status": "Available"}),
            json!({"action": 7}),
            json!("list_storages"),
        ] {
            let err = RegistryRequest::from_event(&event).unwrap_err();
            assert!(matches!(err, DomainError::InvalidArgument { .. }));
            assert_eq!(err.to_string(), INVALID_ACTION_MESSAGE);
        }
    }
}
