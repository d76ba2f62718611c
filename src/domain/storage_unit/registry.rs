//! The registry document: every storage unit, in document order

use serde::{Deserialize, Serialize};

use super::entity::{StorageUnit, UnitStatus};
use crate::domain::DomainError;

/// Outcome of a successful status transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub unit_id: String,
    pub previous_status: String,
    pub new_status: UnitStatus,
}

impl StatusChange {
    /// Human-readable confirmation returned to callers
    pub fn message(&self) -> String {
        format!(
            "Status of unit {} changed from {} to {}.",
            self.unit_id, self.previous_status, self.new_status
        )
    }
}

/// Whole collection of storage units as persisted in one JSON array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    units: Vec<StorageUnit>,
}

impl Registry {
    pub fn new(units: Vec<StorageUnit>) -> Self {
        Self { units }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(bytes).map_err(|e| {
            DomainError::serialization(format!("Failed to decode registry document: {}", e))
        })
    }

    pub fn to_json(&self) -> Result<Vec<u8>, DomainError> {
        serde_json::to_vec(self).map_err(|e| {
            DomainError::serialization(format!("Failed to encode registry document: {}", e))
        })
    }

    pub fn units(&self) -> &[StorageUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units with the given status, preserving document order
    pub fn with_status(&self, status: UnitStatus) -> Vec<StorageUnit> {
        self.units
            .iter()
            .filter(|unit| unit.has_status(status))
            .cloned()
            .collect()
    }

    /// Set the status of the first unit whose id matches.
    ///
    /// Returns `None` and leaves the registry untouched when no unit matches.
    pub fn set_status(&mut self, unit_id: &str, status: UnitStatus) -> Option<StatusChange> {
        let unit = self.units.iter_mut().find(|unit| unit.unit_id() == unit_id)?;
        let previous_status = unit.set_status(status);

        Some(StatusChange {
            unit_id: unit_id.to_string(),
            previous_status,
            new_status: status,
        })
    }
}
