//! Fleet quality metrics (KPIs).
//!
//! Summarises a fleet after scheduling so different algorithms and
//! policies can be compared on the same input.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Fleet | Number of trucks |
//! | Unused trucks | Trucks carrying nothing |
//! | Unused space | Free capacity summed over used trucks |
//! | Avg distance | Mean route length over used trucks |
//! | Avg fullness | Mean percent fullness over used trucks |
//! | Unscheduled | Parcels no truck could take |

use serde::{Deserialize, Serialize};

use crate::error::MissingDistance;
use crate::models::{DistanceLookup, Fleet, Parcel};

/// Fleet performance indicators.
///
/// Averages are 0.0 when no truck carries anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetStats {
    /// Number of trucks in the fleet.
    pub fleet: usize,
    /// Trucks that carry no parcels.
    pub unused_trucks: usize,
    /// Unused capacity summed over the trucks that carry something.
    pub unused_space: u64,
    /// Mean route distance of the trucks that carry something.
    pub avg_distance: f64,
    /// Mean percent fullness of the trucks that carry something.
    pub avg_fullness: f64,
    /// Number of parcels left unscheduled.
    pub unscheduled: usize,
}

impl FleetStats {
    /// Computes statistics from a scheduled fleet.
    ///
    /// # Arguments
    /// * `fleet` - The fleet after scheduling.
    /// * `distances` - Distance table covering every route leg.
    /// * `unscheduled` - Parcels the scheduler returned.
    pub fn calculate<D: DistanceLookup + ?Sized>(
        fleet: &Fleet,
        distances: &D,
        unscheduled: &[Parcel],
    ) -> Result<Self, MissingDistance> {
        Ok(Self {
            fleet: fleet.num_trucks(),
            unused_trucks: fleet.num_trucks() - fleet.num_nonempty_trucks(),
            unused_space: fleet.total_unused_space(),
            avg_distance: fleet.average_distance_travelled(distances)?.unwrap_or(0.0),
            avg_fullness: fleet.average_fullness().unwrap_or(0.0),
            unscheduled: unscheduled.len(),
        })
    }

    /// Whether every parcel was scheduled.
    pub fn all_scheduled(&self) -> bool {
        self.unscheduled == 0
    }
}
