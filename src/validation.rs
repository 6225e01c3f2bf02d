//! Input validation for scheduling problems.
//!
//! Checks structural integrity of parcels and trucks before scheduling.
//! Detects:
//! - Duplicate IDs
//! - Zero-volume parcels
//! - Zero-capacity trucks
//! - Parcels without a destination

use std::collections::HashSet;
use std::fmt;

use crate::models::{Parcel, Truck};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A parcel has zero volume.
    EmptyParcel,
    /// A truck has zero capacity.
    ZeroCapacity,
    /// A parcel has a blank destination.
    MissingDestination,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the input data for a scheduling run.
///
/// Checks:
/// 1. No duplicate parcel IDs
/// 2. No duplicate truck IDs
/// 3. All parcels have a positive volume
/// 4. All parcels have a destination
/// 5. All trucks have a positive capacity
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(parcels: &[Parcel], trucks: &[Truck]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut parcel_ids = HashSet::new();
    for p in parcels {
        if !parcel_ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate parcel ID: {}", p.id),
            ));
        }
        if p.volume == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyParcel,
                format!("Parcel {} has zero volume", p.id),
            ));
        }
        if p.destination.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingDestination,
                format!("Parcel {} has no destination", p.id),
            ));
        }
    }

    let mut truck_ids = HashSet::new();
    for t in trucks {
        if !truck_ids.insert(t.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate truck ID: {}", t.id()),
            ));
        }
        if t.capacity() == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Truck {} has zero capacity", t.id()),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
