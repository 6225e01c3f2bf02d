//! Random scheduler.
//!
//! # Algorithm
//!
//! 1. Draw a parcel uniformly at random from those not yet processed.
//! 2. Collect the trucks with room for it.
//! 3. Pack it into one of them chosen uniformly at random, or mark it
//!    unscheduled if there is none.
//!
//! The random source is owned by the scheduler, so a seeded generator
//! gives reproducible runs.

use log::{debug, info};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{trucks_with_room, Scheduler};
use crate::models::{Parcel, Truck};

/// Scheduler that places parcels in random order onto random trucks.
///
/// # Example
///
/// ```
/// use parcel_schedule::models::{Parcel, Truck};
/// use parcel_schedule::scheduler::{RandomScheduler, Scheduler};
///
/// let parcels = vec![Parcel::new(1, 10, "York", "London")];
/// let mut trucks = vec![Truck::new(1, 5, "York"), Truck::new(2, 20, "York")];
///
/// let mut scheduler = RandomScheduler::seeded(7);
/// let unscheduled = scheduler.schedule(&parcels, &mut trucks, false);
///
/// assert!(unscheduled.is_empty());
/// assert_eq!(trucks[1].parcel_ids(), vec![1]);
/// ```
#[derive(Debug, Clone)]
pub struct RandomScheduler<R> {
    rng: R,
}

impl<R: Rng> RandomScheduler<R> {
    /// Creates a scheduler drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Consumes the scheduler, returning its random source.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl RandomScheduler<StdRng> {
    /// Creates a reproducible scheduler from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a scheduler seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Scheduler for RandomScheduler<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn schedule(
        &mut self,
        parcels: &[Parcel],
        trucks: &mut [Truck],
        verbose: bool,
    ) -> Vec<Parcel> {
        let mut remaining: Vec<&Parcel> = parcels.iter().collect();
        let mut unscheduled = Vec::new();

        while !remaining.is_empty() {
            let parcel = remaining.swap_remove(self.rng.random_range(0..remaining.len()));
            let good = trucks_with_room(trucks, parcel);

            match good.choose(&mut self.rng) {
                Some(&idx) => {
                    let truck = &mut trucks[idx];
                    truck.pack(parcel);
                    if verbose {
                        debug!(
                            "parcel {} -> truck {}, {} space left",
                            parcel.id,
                            truck.id(),
                            truck.remaining_space()
                        );
                    }
                }
                None => {
                    if verbose {
                        debug!("parcel {} fits no truck", parcel.id);
                    }
                    unscheduled.push(parcel.clone());
                }
            }
        }

        info!(
            "random: {} of {} parcels unscheduled on {} trucks",
            unscheduled.len(),
            parcels.len(),
            trucks.len()
        );
        unscheduled
    }
}
