//! REST endpoints for storage units

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{StatusChange, StorageUnit};

/// Query for listing storage units
#[derive(Debug, Clone, Deserialize)]
pub struct ListStoragesQuery {
    #[serde(default)]
    pub status: String,
}

/// Request to change a unit's status
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusApiRequest {
    #[serde(default)]
    pub new_status: String,
}

/// GET /storages?status=...
pub async fn list_storages(
    State(state): State<AppState>,
    Query(query): Query<ListStoragesQuery>,
) -> Result<Json<Vec<StorageUnit>>, ApiError> {
    debug!(status = %query.status, "Listing storage units");

    let units = state.registry.list_storages(&query.status).await?;
    Ok(Json(units))
}

/// PUT /storages/{unit_id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(unit_id): Path<String>,
    Json(request): Json<UpdateStatusApiRequest>,
) -> Result<Json<StatusChange>, ApiError> {
    debug!(unit_id = %unit_id, new_status = %request.new_status, "Updating storage unit status");

    let change = state
        .registry
        .update_unit_status(&unit_id, &request.new_status)
        .await?;
    Ok(Json(change))
}
