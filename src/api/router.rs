use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::invoke;
use super::state::AppState;
use super::storages;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Action-dispatched invocation
        .route("/invoke", post(invoke::invoke))
        // REST surface over the same operations
        .route("/storages", get(storages::list_storages))
        .route("/storages/{unit_id}/status", put(storages::update_status))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
