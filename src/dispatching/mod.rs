//! Ordering rules and their configuration.
//!
//! The greedy scheduler is parameterised by two rules:
//! a [`ParcelOrder`] that decides which parcel is placed next, and a
//! [`TruckOrder`] that picks among trucks able to take it.
//! [`GreedyConfig`] maps the textual policy keys onto those rules.
//!
//! # Usage
//!
//! ```
//! use parcel_schedule::dispatching::{GreedyConfig, ParcelPriority, SortOrder};
//! use parcel_schedule::dispatching::rules::{ParcelOrder, TruckOrder};
//!
//! let config = GreedyConfig::new(
//!     ParcelPriority::Destination,
//!     SortOrder::NonDecreasing,
//!     SortOrder::NonIncreasing,
//! );
//! assert_eq!(config.parcel_rule(), ParcelOrder::DestinationAscending);
//! assert_eq!(config.truck_rule(), TruckOrder::MostSpaceFirst);
//! ```

mod config;
pub mod rules;

pub use config::{GreedyConfig, ParcelPriority, SortOrder};
pub use rules::{ParcelOrder, TruckOrder};
