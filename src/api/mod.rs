//! API layer - HTTP endpoints and the invocation envelope

pub mod health;
pub mod invoke;
pub mod router;
pub mod state;
pub mod storages;
pub mod types;

pub use invoke::handle_event;
pub use router::create_router_with_state;
pub use state::AppState;
