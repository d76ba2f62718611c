//! Infrastructure layer - Blob store backends, services and logging

pub mod logging;
pub mod registry;
pub mod storage;
