//! Storage unit domain module
//!
//! A storage unit is a rentable space tracked by status. All units live in a
//! single [`Registry`] document that is read and written as a whole.

mod entity;
mod registry;

pub use entity::{StorageUnit, UnitStatus, UnknownStatus};
pub use registry::{Registry, StatusChange};
