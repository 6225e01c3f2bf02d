//! Parcel-to-truck scheduling.
//!
//! Assigns parcels to a fleet of capacity-limited trucks that leave from
//! and return to a common depot, building each truck's route as parcels
//! are packed, and reports fleet statistics for comparing algorithms.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Parcel`, `Truck`, `Fleet`, `DistanceMap`
//! - **`container`**: Stable priority queue with pluggable ordering
//! - **`dispatching`**: Parcel ordering and truck selection rules, greedy configuration
//! - **`scheduler`**: `GreedyScheduler`, `RandomScheduler`, `FleetStats`
//! - **`validation`**: Input integrity checks (duplicate IDs, zero volumes and capacities)
//! - **`data`**: Reading and writing comma-separated parcel, truck and distance records
//! - **`generator`**: Random problem generation
//! - **`experiment`**: Configured end-to-end runs
//!
//! # Invariants
//!
//! After any scheduling run no truck exceeds its capacity, every route
//! starts and ends at the truck's depot, and every input parcel is either
//! on exactly one truck or in the unscheduled list.

pub mod container;
pub mod data;
pub mod dispatching;
pub mod error;
pub mod experiment;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod validation;
