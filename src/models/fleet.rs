//! Fleet model.
//!
//! A fleet owns the trucks considered in one scheduling run and answers
//! aggregate questions about them once scheduling is done.

use std::collections::BTreeMap;
use std::fmt;

use super::distance::DistanceLookup;
use super::parcel::ParcelId;
use super::truck::{Truck, TruckId};
use crate::error::{FleetError, MissingDistance};

/// A collection of trucks with unique IDs.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    trucks: Vec<Truck>,
}

impl Fleet {
    /// Creates an empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fleet from `trucks`, rejecting duplicate IDs.
    pub fn from_trucks(trucks: impl IntoIterator<Item = Truck>) -> Result<Self, FleetError> {
        let mut fleet = Self::new();
        for truck in trucks {
            fleet.add_truck(truck)?;
        }
        Ok(fleet)
    }

    /// Adds a truck, rejecting duplicate IDs.
    pub fn add_truck(&mut self, truck: Truck) -> Result<(), FleetError> {
        if self.trucks.iter().any(|t| t.id() == truck.id()) {
            return Err(FleetError::DuplicateTruck(truck.id()));
        }
        self.trucks.push(truck);
        Ok(())
    }

    /// Trucks in insertion order.
    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    /// Mutable access for schedulers.
    pub fn trucks_mut(&mut self) -> &mut [Truck] {
        &mut self.trucks
    }

    /// Looks up a truck by ID.
    pub fn truck(&self, id: TruckId) -> Option<&Truck> {
        self.trucks.iter().find(|t| t.id() == id)
    }

    /// Number of trucks.
    pub fn num_trucks(&self) -> usize {
        self.trucks.len()
    }

    /// Number of trucks carrying at least one parcel.
    pub fn num_nonempty_trucks(&self) -> usize {
        self.nonempty().count()
    }

    /// Packed parcel IDs per truck, in packing order.
    pub fn parcel_allocations(&self) -> BTreeMap<TruckId, Vec<ParcelId>> {
        self.trucks
            .iter()
            .map(|t| (t.id(), t.parcel_ids()))
            .collect()
    }

    /// Unused capacity summed over non-empty trucks.
    pub fn total_unused_space(&self) -> u64 {
        self.nonempty().map(|t| u64::from(t.remaining_space())).sum()
    }

    /// Mean fullness of the non-empty trucks, or `None` if all are empty.
    pub fn average_fullness(&self) -> Option<f64> {
        let used = self.num_nonempty_trucks();
        if used == 0 {
            return None;
        }
        let total: f64 = self.nonempty().map(Truck::fullness).sum();
        Some(total / used as f64)
    }

    /// Distance driven by all trucks together.
    pub fn total_distance_travelled<D: DistanceLookup + ?Sized>(
        &self,
        map: &D,
    ) -> Result<u64, MissingDistance> {
        self.trucks
            .iter()
            .try_fold(0u64, |total, t| Ok(total + t.distance(map)?))
    }

    /// Mean distance over the non-empty trucks, or `None` if all are empty.
    pub fn average_distance_travelled<D: DistanceLookup + ?Sized>(
        &self,
        map: &D,
    ) -> Result<Option<f64>, MissingDistance> {
        let used = self.num_nonempty_trucks();
        if used == 0 {
            return Ok(None);
        }
        let total = self.total_distance_travelled(map)?;
        Ok(Some(total as f64 / used as f64))
    }

    fn nonempty(&self) -> impl Iterator<Item = &Truck> {
        self.trucks.iter().filter(|t| !t.is_empty())
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trucks in this Fleet:")?;
        if self.trucks.is_empty() {
            return write!(f, "\nThis Fleet is empty");
        }
        for truck in &self.trucks {
            write!(f, "\n{truck}")?;
        }
        Ok(())
    }
}
