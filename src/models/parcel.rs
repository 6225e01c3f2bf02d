//! Parcel model.
//!
//! A parcel is a unit of cargo with a fixed volume, a source city, and a
//! destination city. Parcels are created once by the caller and are
//! read-only inputs to scheduling.

use serde::{Deserialize, Serialize};

/// Caller-assigned parcel identifier.
pub type ParcelId = u32;

/// A parcel to be delivered from its source to its destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parcel {
    /// Unique parcel identifier.
    pub id: ParcelId,
    /// Volume in cubic centimetres (must be positive).
    pub volume: u32,
    /// City the parcel came from. Not used by scheduling.
    pub source: String,
    /// City the parcel must be delivered to.
    pub destination: String,
}

impl Parcel {
    /// Creates a new parcel.
    pub fn new(
        id: ParcelId,
        volume: u32,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id,
            volume,
            source: source.into(),
            destination: destination.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parcel_new() {
        let p = Parcel::new(1234, 20, "Toronto", "Vancouver");
        assert_eq!(p.id, 1234);
        assert_eq!(p.volume, 20);
        assert_eq!(p.source, "Toronto");
        assert_eq!(p.destination, "Vancouver");
    }

    #[test]
    fn test_parcel_serde() {
        let p = Parcel::new(7, 5, "Guelph", "Ottawa");
        let json = serde_json::to_string(&p).unwrap();
        let back: Parcel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
