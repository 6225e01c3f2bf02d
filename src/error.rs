//! Error types for configuration, data loading, and fleet queries.
//!
//! Packing a parcel that does not fit is not an error: [`Truck::pack`]
//! reports it with a boolean and the scheduler routes the parcel to the
//! unscheduled list.
//!
//! [`Truck::pack`]: crate::models::Truck::pack

use thiserror::Error;

use crate::models::TruckId;
use crate::validation::ValidationError;

/// Errors raised while building a scheduler from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required key was absent.
    #[error("missing configuration key `{key}`")]
    MissingKey {
        /// Name of the absent key.
        key: &'static str,
    },
    /// A key carried a value outside its recognised set.
    #[error("unrecognised value `{value}` for `{key}`: {reason}")]
    UnknownValue {
        /// Name of the offending key.
        key: &'static str,
        /// Value found in the configuration.
        value: String,
        /// Parser message listing the accepted values.
        reason: String,
    },
    /// A setting is well-formed but cannot be satisfied.
    #[error("invalid `{key}`: {reason}")]
    Invalid {
        /// Name of the offending key.
        key: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// The configuration document could not be parsed.
    #[error("failed to parse configuration")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while reading parcel, truck, or distance records.
#[derive(Debug, Error)]
pub enum DataError {
    /// A record could not be read or deserialised.
    #[error("malformed {kind} record on line {line}")]
    Record {
        /// Which kind of file was being read.
        kind: &'static str,
        /// 1-based line number of the record.
        line: u64,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// A record had the wrong number of fields.
    #[error("{kind} record on line {line} has {found} fields")]
    FieldCount {
        /// Which kind of file was being read.
        kind: &'static str,
        /// 1-based line number of the record.
        line: u64,
        /// Number of fields found.
        found: usize,
    },
    /// A numeric field could not be parsed.
    #[error("invalid number `{value}` in {kind} record on line {line}")]
    InvalidNumber {
        /// Which kind of file was being read.
        kind: &'static str,
        /// 1-based line number of the record.
        line: u64,
        /// Raw field text.
        value: String,
    },
    /// Writing generated records failed.
    #[error("failed to write {kind} records")]
    Write {
        /// Which kind of file was being written.
        kind: &'static str,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
}

/// A route leg whose distance is not recorded in the distance table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no distance recorded from {from} to {to}")]
pub struct MissingDistance {
    /// Leg origin.
    pub from: String,
    /// Leg destination.
    pub to: String,
}

/// Errors raised while assembling a fleet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetError {
    /// A truck with the same ID is already in the fleet.
    #[error("truck {0} is already in the fleet")]
    DuplicateTruck(TruckId),
}

/// Errors raised by a scheduling experiment run.
#[derive(Debug, Error)]
pub enum ExperimentError {
    /// The experiment configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Input data could not be loaded.
    #[error(transparent)]
    Data(#[from] DataError),
    /// Input data failed validation.
    #[error("input validation failed with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),
    /// The fleet could not be assembled.
    #[error(transparent)]
    Fleet(#[from] FleetError),
    /// A truck route uses a leg missing from the distance table.
    #[error(transparent)]
    Distance(#[from] MissingDistance),
}
