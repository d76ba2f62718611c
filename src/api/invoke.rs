//! Action-dispatched invocation endpoint

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, InvocationResponse};
use crate::domain::request::INVALID_ACTION_MESSAGE;
use crate::domain::{DomainError, RegistryRequest};
use crate::infrastructure::registry::RegistryService;

/// Handle one invocation event end to end.
///
/// Recognised failures become structured responses; write-path failures are
/// returned as `Err` and left for the caller's environment to deal with.
pub async fn handle_event(
    service: &RegistryService,
    event: &Value,
) -> Result<InvocationResponse, DomainError> {
    let result = match RegistryRequest::from_event(event) {
        Ok(request) => service.dispatch(request).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(outcome) => InvocationResponse::from_outcome(&outcome),
        Err(e) => InvocationResponse::from_error(e),
    }
}

/// POST /invoke
pub async fn invoke(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let event: Value = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            debug!(error = %e, "Rejecting undecodable invocation event");
            let response = InvocationResponse::from_error(DomainError::invalid_argument(
                INVALID_ACTION_MESSAGE,
            ))?;
            return Ok((response.status(), Json(response)).into_response());
        }
    };

    let response = handle_event(&state.registry, &event).await?;
    Ok((response.status(), Json(response)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::registry::RegistryConfig;
    use crate::infrastructure::storage::InMemoryBlobStore;
    use serde_json::json;
    use std::sync::Arc;

    fn service() -> RegistryService {
        let store = InMemoryBlobStore::new().with_object(
            "storage_units.json",
            r#"[{"unit_id":"A","status":"Available"},{"unit_id":"B","status":"Reserved"}]"#,
        );
        RegistryService::new(Arc::new(store), RegistryConfig::default())
    }

    #[tokio::test]
    async fn test_scenario() {
        let service = service();

        let response = handle_event(&service, &json!({"action": "list_storages", "status": "Available"}))
            .await
            .unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"[{"unit_id":"A","status":"Available"}]"#);

        let response = handle_event(
            &service,
            &json!({"action": "update_status", "unit_id": "B", "new_status": "Problem"}),
        )
        .await
        .unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body,
            "\"Status of unit B changed from Reserved to Problem.\""
        );

        let response = handle_event(&service, &json!({"action": "list_storages", "status": "Problem"}))
            .await
            .unwrap();
        assert_eq!(response.body, r#"[{"unit_id":"B","status":"Problem"}]"#);
    }

    #[tokio::test]
    async fn test_error_envelopes() {
        let service = service();

        let cases = [
            (json!({"action": "explode"}), 400, "\"Invalid action specified.\""),
            (json!({"action": "list_storages", "status": "Sold"}), 400, "\"Invalid status specified.\""),
            (json!({"action": "list_storages"}), 400, "\"Invalid status specified.\""),
            (
                json!({"action": "update_status", "unit_id": "A", "new_status": "Sold"}),
                400,
                "\"Invalid status change.\"",
            ),
            (
                json!({"action": "update_status", "unit_id": "Z", "new_status": "Problem"}),
                404,
                "\"Unit not found.\"",
            ),
        ];

        for (event, status, body) in cases {
            let response = handle_event(&service, &event).await.unwrap();
            assert_eq!(response.status_code, status, "event {}", event);
            assert_eq!(response.body, body, "event {}", event);
        }
    }
}
