//! Scheduling domain models.
//!
//! Provides the data types for parcel-to-truck scheduling: the parcels to
//! deliver, the trucks that carry them, the fleet that groups trucks, and
//! the distance table used to measure routes.
//!
//! # Ownership
//!
//! | Type | Mutability | Owner |
//! |------|-----------|-------|
//! | Parcel | Immutable value | Caller |
//! | Truck | Mutated only by `pack` | Caller / Fleet |
//! | Fleet | Aggregation only | Caller |
//! | DistanceMap | Built once, then read | Caller |

mod distance;
mod fleet;
mod parcel;
mod truck;

pub use distance::{DistanceLookup, DistanceMap};
pub use fleet::Fleet;
pub use parcel::{Parcel, ParcelId};
pub use truck::{Truck, TruckId};
