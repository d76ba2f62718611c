//! Registry infrastructure - the storage unit status service

mod config;
mod service;

pub use config::{ReadFailurePolicy, RegistryConfig, WriteMode, DEFAULT_REGISTRY_KEY};
pub use service::{
    RegistryOutcome, RegistryService, INVALID_STATUS_CHANGE_MESSAGE, INVALID_STATUS_MESSAGE,
    STORE_UNAVAILABLE_MESSAGE, UNIT_NOT_FOUND_MESSAGE,
};
