//! Greedy scheduler configuration.
//!
//! Three keys select the greedy policy:
//!
//! | Key | Values |
//! |-----|--------|
//! | `parcel_priority` | `destination`, `volume` |
//! | `parcel_order` | `non-decreasing`, `non-increasing` |
//! | `truck_order` | `non-decreasing`, `non-increasing` |
//!
//! `truck_order = non-decreasing` picks the truck with the least remaining
//! space; `non-increasing` picks the one with the most.
//!
//! Every value is checked when the configuration is parsed, so a
//! [`GreedyConfig`] always names a complete policy.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::rules::{ParcelOrder, TruckOrder};
use crate::error::ConfigError;

/// Parcel attribute the greedy scheduler sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParcelPriority {
    /// Destination city name.
    Destination,
    /// Parcel volume.
    Volume,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Smallest first.
    NonDecreasing,
    /// Largest first.
    NonIncreasing,
}

/// Parses one textual setting with the same names the serde renames accept.
fn parse_setting<T: DeserializeOwned>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    serde_json::from_value(Value::String(raw.to_string())).map_err(|e| ConfigError::UnknownValue {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Policy selection for [`GreedyScheduler`](crate::scheduler::GreedyScheduler).
///
/// Unrelated keys in the source document are ignored, so the same
/// document can also carry experiment settings.
///
/// # Example
/// ```
/// use parcel_schedule::dispatching::{GreedyConfig, ParcelOrder, TruckOrder};
///
/// let config = GreedyConfig::from_json(
///     r#"{"parcel_priority": "volume",
///         "parcel_order": "non-increasing",
///         "truck_order": "non-decreasing"}"#,
/// ).unwrap();
/// assert_eq!(config.parcel_rule(), ParcelOrder::VolumeDescending);
/// assert_eq!(config.truck_rule(), TruckOrder::LeastSpaceFirst);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreedyConfig {
    /// Attribute parcels are ordered by.
    pub parcel_priority: ParcelPriority,
    /// Direction of the parcel ordering.
    pub parcel_order: SortOrder,
    /// Direction of the truck tie-break on remaining space.
    pub truck_order: SortOrder,
}

impl GreedyConfig {
    /// Creates a configuration.
    pub fn new(parcel_priority: ParcelPriority, parcel_order: SortOrder, truck_order: SortOrder) -> Self {
        Self {
            parcel_priority,
            parcel_order,
            truck_order,
        }
    }

    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse { source })
    }

    /// Parses a configuration from string key/value settings.
    pub fn from_settings(settings: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &'static str| {
            settings
                .get(key)
                .map(String::as_str)
                .ok_or(ConfigError::MissingKey { key })
        };
        Ok(Self {
            parcel_priority: parse_setting("parcel_priority", get("parcel_priority")?)?,
            parcel_order: parse_setting("parcel_order", get("parcel_order")?)?,
            truck_order: parse_setting("truck_order", get("truck_order")?)?,
        })
    }

    /// The parcel ordering rule this configuration selects.
    pub fn parcel_rule(&self) -> ParcelOrder {
        match (self.parcel_priority, self.parcel_order) {
            (ParcelPriority::Destination, SortOrder::NonDecreasing) => {
                ParcelOrder::DestinationAscending
            }
            (ParcelPriority::Destination, SortOrder::NonIncreasing) => {
                ParcelOrder::DestinationDescending
            }
            (ParcelPriority::Volume, SortOrder::NonDecreasing) => ParcelOrder::VolumeAscending,
            (ParcelPriority::Volume, SortOrder::NonIncreasing) => ParcelOrder::VolumeDescending,
        }
    }

    /// The truck tie-break rule this configuration selects.
    pub fn truck_rule(&self) -> TruckOrder {
        match self.truck_order {
            SortOrder::NonDecreasing => TruckOrder::LeastSpaceFirst,
            SortOrder::NonIncreasing => TruckOrder::MostSpaceFirst,
        }
    }
}
