//! Storage unit entity and status types

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lifecycle status of a storage unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitStatus {
    Available,
    Reserved,
    Cancelling,
    Problem,
    Unavailable,
}

impl UnitStatus {
    pub const ALL: [UnitStatus; 5] = [
        Self::Available,
        Self::Reserved,
        Self::Cancelling,
        Self::Problem,
        Self::Unavailable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
            Self::Cancelling => "Cancelling",
            Self::Problem => "Problem",
            Self::Unavailable => "Unavailable",
        }
    }
}

impl std::fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known statuses
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown storage unit status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for UnitStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A single storage unit record
///
/// `status` keeps whatever string the document holds; only statuses written by
/// this service are guaranteed to parse as [`UnitStatus`]. Attributes other
/// than `unit_id` and `status` are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageUnit {
    unit_id: String,
    status: String,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl StorageUnit {
    pub fn new(unit_id: impl Into<String>, status: UnitStatus) -> Self {
        Self {
            unit_id: unit_id.into(),
            status: status.as_str().to_string(),
            attributes: Map::new(),
        }
    }

    // Getters

    pub fn unit_id(&self) -> &str {
        &self.unit_id
    }

    /// Raw status string as stored
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn has_status(&self, status: UnitStatus) -> bool {
        self.status == status.as_str()
    }

    /// Overwrite the status, returning the previous raw value
    pub fn set_status(&mut self, status: UnitStatus) -> String {
        std::mem::replace(&mut self.status, status.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_round_trip_through_str() {
        for status in UnitStatus::ALL {
            assert_eq!(status.as_str().parse::<UnitStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_parse_is_case_sensitive() {
        assert!("available".parse::<UnitStatus>().is_err());
        assert!("".parse::<UnitStatus>().is_err());
        assert!("Broken".parse::<UnitStatus>().is_err());
    }

    #[test]
    fn test_unknown_status_error_names_value() {
        let err = "Broken".parse::<UnitStatus>().unwrap_err();
        assert_eq!(err, UnknownStatus("Broken".to_string()));
        assert_eq!(err.to_string(), "unknown storage unit status 'Broken'");
    }

    #[test]
    fn test_unit_deserialization_keeps_extra_attributes() {
        let unit: StorageUnit = serde_json::from_value(json!({
            "unit_id": "A",
            "size": "10x10",
            "status": "Available",
            "floor": 2
        }))
        .unwrap();

        assert_eq!(unit.unit_id(), "A");
        assert!(unit.has_status(UnitStatus::Available));
        assert_eq!(unit.attributes().get("size"), Some(&json!("10x10")));
        assert_eq!(unit.attributes().get("floor"), Some(&json!(2)));
    }

    #[test]
    fn test_unit_with_unknown_status_still_loads() {
        let unit: StorageUnit =
            serde_json::from_value(json!({"unit_id": "X", "status": "Demolished"})).unwrap();

        assert_eq!(unit.status(), "Demolished");
        assert!(UnitStatus::ALL.iter().all(|status| !unit.has_status(*status)));
    }

    #[test]
    fn test_set_status_returns_previous() {
        let mut unit = StorageUnit::new("B", UnitStatus::Reserved);
        let previous = unit.set_status(UnitStatus::Problem);

        assert_eq!(previous, "Reserved");
        assert!(unit.has_status(UnitStatus::Problem));
    }
}
