//! Priority-driven greedy scheduler.
//!
//! # Algorithm
//!
//! 1. Queue all parcels by the configured [`ParcelOrder`].
//! 2. Take the next parcel; collect the trucks with room for it.
//! 3. Among those, keep only the trucks whose most recent stop is the
//!    parcel's destination, if there are any.
//! 4. Pick one with the configured [`TruckOrder`] and pack it; with no
//!    candidate the parcel is unscheduled.
//!
//! # Complexity
//! O(n² + n·m) for n parcels and m trucks: queue insertion is linear.

use log::{debug, info};

use super::{trucks_with_room, Scheduler};
use crate::container::PriorityQueue;
use crate::dispatching::{GreedyConfig, ParcelOrder, TruckOrder};
use crate::error::ConfigError;
use crate::models::{Parcel, Truck};

/// Greedy scheduler with configurable parcel order and truck tie-break.
///
/// # Example
///
/// ```
/// use parcel_schedule::dispatching::{ParcelOrder, TruckOrder};
/// use parcel_schedule::models::{Parcel, Truck};
/// use parcel_schedule::scheduler::{GreedyScheduler, Scheduler};
///
/// let parcels = vec![
///     Parcel::new(1, 30, "York", "London"),
///     Parcel::new(2, 10, "York", "London"),
/// ];
/// let mut trucks = vec![Truck::new(1, 40, "York"), Truck::new(2, 40, "York")];
///
/// let mut scheduler =
///     GreedyScheduler::new(ParcelOrder::VolumeDescending, TruckOrder::MostSpaceFirst);
/// let unscheduled = scheduler.schedule(&parcels, &mut trucks, false);
///
/// assert!(unscheduled.is_empty());
/// // The second parcel joins the truck already going to London.
/// assert_eq!(trucks[0].parcel_ids(), vec![1, 2]);
/// assert_eq!(trucks[0].route(), ["York", "London", "York"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyScheduler {
    parcel_order: ParcelOrder,
    truck_order: TruckOrder,
}

impl GreedyScheduler {
    /// Creates a scheduler from explicit rules.
    pub fn new(parcel_order: ParcelOrder, truck_order: TruckOrder) -> Self {
        Self {
            parcel_order,
            truck_order,
        }
    }

    /// Creates a scheduler from a parsed configuration.
    pub fn from_config(config: &GreedyConfig) -> Self {
        Self::new(config.parcel_rule(), config.truck_rule())
    }

    /// Creates a scheduler from a JSON configuration document.
    ///
    /// Fails if a policy key is missing or carries an unrecognised value.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(Self::from_config(&GreedyConfig::from_json(json)?))
    }

    /// The parcel ordering rule.
    pub fn parcel_order(&self) -> ParcelOrder {
        self.parcel_order
    }

    /// The truck tie-break rule.
    pub fn truck_order(&self) -> TruckOrder {
        self.truck_order
    }
}

impl From<GreedyConfig> for GreedyScheduler {
    fn from(config: GreedyConfig) -> Self {
        Self::from_config(&config)
    }
}

impl Scheduler for GreedyScheduler {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn schedule(
        &mut self,
        parcels: &[Parcel],
        trucks: &mut [Truck],
        verbose: bool,
    ) -> Vec<Parcel> {
        let mut queue = PriorityQueue::new(self.parcel_order);
        queue.extend(parcels.iter().cloned());

        let mut unscheduled = Vec::new();

        while let Some(parcel) = queue.remove() {
            let good = trucks_with_room(trucks, &parcel);
            let very_good: Vec<usize> = good
                .iter()
                .copied()
                .filter(|&i| trucks[i].very_good_truck(&parcel))
                .collect();
            let candidates = if very_good.is_empty() { &good } else { &very_good };

            match self.truck_order.select(trucks, candidates) {
                Some(idx) => {
                    let truck = &mut trucks[idx];
                    if verbose {
                        debug!(
                            "parcel {} (volume {}, to {}) -> truck {} ({} of {} candidates share its stop), {} space left before packing",
                            parcel.id,
                            parcel.volume,
                            parcel.destination,
                            truck.id(),
                            very_good.len(),
                            good.len(),
                            truck.remaining_space()
                        );
                    }
                    truck.pack(&parcel);
                }
                None => {
                    if verbose {
                        debug!(
                            "parcel {} (volume {}, to {}) fits no truck",
                            parcel.id, parcel.volume, parcel.destination
                        );
                    }
                    unscheduled.push(parcel);
                }
            }
        }

        info!(
            "greedy [{}, {}]: {} of {} parcels unscheduled on {} trucks",
            self.parcel_order.name(),
            self.truck_order.name(),
            unscheduled.len(),
            parcels.len(),
            trucks.len()
        );
        unscheduled
    }
}
