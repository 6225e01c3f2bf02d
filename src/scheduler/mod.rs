//! Parcel schedulers and fleet statistics.
//!
//! A scheduler decides which truck carries each parcel. It packs parcels
//! into the trucks it is given (which also extends their routes) and
//! returns the parcels that found no truck with enough room.
//!
//! # Algorithms
//!
//! - [`GreedyScheduler`]: processes parcels in a configured priority order
//!   and prefers trucks already heading to the parcel's destination.
//! - [`RandomScheduler`]: processes parcels in random order and packs each
//!   into a random truck with room.
//!
//! Neither is optimal; both are baselines for comparing fleet statistics
//! via [`FleetStats`].

mod greedy;
mod kpi;
mod random;

pub use greedy::GreedyScheduler;
pub use kpi::FleetStats;
pub use random::RandomScheduler;

use crate::models::{Parcel, Truck};

/// Assigns parcels to trucks.
///
/// # Contract
/// - `parcels` is never modified.
/// - Trucks are mutated in place through [`Truck::pack`] only.
/// - The returned parcels are exactly those for which no truck had enough
///   remaining space when they were processed; every other parcel is
///   packed onto exactly one truck.
/// - `verbose` only controls diagnostic logging.
pub trait Scheduler {
    /// Short algorithm name for logs.
    fn name(&self) -> &'static str;

    /// Schedules `parcels` onto `trucks` and returns the unscheduled ones.
    fn schedule(&mut self, parcels: &[Parcel], trucks: &mut [Truck], verbose: bool)
        -> Vec<Parcel>;
}

/// Indices of the trucks with room for `parcel`, in fleet order.
fn trucks_with_room(trucks: &[Truck], parcel: &Parcel) -> Vec<usize> {
    trucks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.can_pack(parcel))
        .map(|(i, _)| i)
        .collect()
}
