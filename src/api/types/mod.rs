//! API request and response types

pub mod error;
pub mod invocation;
pub mod json;

pub use error::{ApiError, ApiErrorResponse};
pub use invocation::InvocationResponse;
pub use json::Json;
