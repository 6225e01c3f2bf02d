//! Truck model.
//!
//! A truck has a fixed volume capacity, the parcels packed onto it in
//! packing order, and a route that starts and ends at its depot.
//!
//! # Invariants
//! - Packed volume never exceeds capacity.
//! - Once a parcel is packed the route has at least two entries and its
//!   first and last entries are both the depot.
//!
//! [`Truck::pack`] is the only mutator, so both invariants hold for every
//! truck reachable through the public API.

use std::fmt;

use serde::Serialize;

use super::distance::DistanceLookup;
use super::parcel::{Parcel, ParcelId};
use crate::error::MissingDistance;

/// Caller-assigned truck identifier.
pub type TruckId = u32;

/// A capacity-bounded vehicle with a depot and an evolving route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Truck {
    id: TruckId,
    capacity: u32,
    parcels: Vec<Parcel>,
    route: Vec<String>,
    #[serde(skip)]
    packed_volume: u32,
}

impl Truck {
    /// Creates an empty truck parked at `depot`.
    pub fn new(id: TruckId, capacity: u32, depot: impl Into<String>) -> Self {
        Self {
            id,
            capacity,
            parcels: Vec::new(),
            route: vec![depot.into()],
            packed_volume: 0,
        }
    }

    /// Truck identifier.
    pub fn id(&self) -> TruckId {
        self.id
    }

    /// Volume capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// City the truck starts from and returns to.
    pub fn depot(&self) -> &str {
        &self.route[0]
    }

    /// Packed parcels, in packing order.
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// IDs of the packed parcels, in packing order.
    pub fn parcel_ids(&self) -> Vec<ParcelId> {
        self.parcels.iter().map(|p| p.id).collect()
    }

    /// Cities visited, beginning (and once loaded, ending) at the depot.
    pub fn route(&self) -> &[String] {
        &self.route
    }

    /// Whether nothing has been packed yet.
    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Total volume of the packed parcels.
    pub fn sum_vol(&self) -> u32 {
        self.packed_volume
    }

    /// Capacity not yet taken by packed parcels.
    pub fn remaining_space(&self) -> u32 {
        self.capacity - self.packed_volume
    }

    /// Whether `parcel` fits in the remaining space.
    pub fn can_pack(&self, parcel: &Parcel) -> bool {
        parcel.volume <= self.remaining_space()
    }

    /// The most recently added stop, if any parcel has been packed.
    pub fn last_stop(&self) -> Option<&str> {
        if self.route.len() < 2 {
            return None;
        }
        Some(&self.route[self.route.len() - 2])
    }

    /// Packs `parcel` if it fits, updating the route.
    ///
    /// The first parcel turns the route into `[depot, destination, depot]`.
    /// A later parcel bound for the most recently added stop shares that
    /// stop; any other destination is inserted just before the returning
    /// depot.
    ///
    /// Returns `false` and leaves the truck untouched if the parcel would
    /// exceed capacity.
    pub fn pack(&mut self, parcel: &Parcel) -> bool {
        if !self.can_pack(parcel) {
            return false;
        }

        let joins_last_stop = self.last_stop().map(|stop| stop == parcel.destination);
        match joins_last_stop {
            None => {
                let depot = self.route[0].clone();
                self.route.push(parcel.destination.clone());
                self.route.push(depot);
            }
            Some(true) => {}
            Some(false) => {
                let at = self.route.len() - 1;
                self.route.insert(at, parcel.destination.clone());
            }
        }

        self.packed_volume += parcel.volume;
        self.parcels.push(parcel.clone());
        true
    }

    /// Affinity probe: whether `parcel` can join this truck's latest stop.
    ///
    /// True iff the truck already carries something, its most recently
    /// added stop is the parcel's destination, and the parcel fits.
    pub fn very_good_truck(&self, parcel: &Parcel) -> bool {
        self.last_stop() == Some(parcel.destination.as_str()) && self.can_pack(parcel)
    }

    /// Percentage of capacity in use (0.0 when empty).
    pub fn fullness(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        f64::from(self.packed_volume) * 100.0 / f64::from(self.capacity)
    }

    /// Total distance along the route according to `map`.
    ///
    /// A route that never left the depot has distance 0.
    pub fn distance<D: DistanceLookup + ?Sized>(&self, map: &D) -> Result<u64, MissingDistance> {
        self.route.windows(2).try_fold(0u64, |total, leg| {
            map.distance(&leg[0], &leg[1])
                .map(|d| total + u64::from(d))
                .ok_or_else(|| MissingDistance {
                    from: leg[0].clone(),
                    to: leg[1].clone(),
                })
        })
    }
}

impl fmt::Display for Truck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Truck ID = {}, Capacity = {}, Depot is {}:",
            self.id,
            self.capacity,
            self.depot()
        )?;
        if self.parcels.is_empty() {
            return write!(f, "\nEmpty");
        }
        for p in &self.parcels {
            write!(
                f,
                "\nParcel ID = {}, Volume = {}, Destination is {}",
                p.id, p.volume, p.destination
            )?;
        }
        Ok(())
    }
}
