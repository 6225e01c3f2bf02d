//! Built-in ordering rules.
//!
//! # Parcel rules
//! Decide the order in which the greedy scheduler processes parcels:
//! by destination name or by volume, each ascending or descending.
//!
//! # Truck rules
//! Break ties among trucks that can all take a parcel: least remaining
//! space first (best fit) or most remaining space first (worst fit).
//!
//! Both families are strict: equal keys never outrank each other, so the
//! priority queue keeps equal parcels in input order and truck selection
//! keeps the leftmost of equally-loaded trucks.

use crate::container::Priority;
use crate::models::{Parcel, Truck};

// ======================== Parcel rules ========================

/// Order in which parcels are taken off the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParcelOrder {
    /// Alphabetically smallest destination first.
    DestinationAscending,
    /// Alphabetically largest destination first.
    DestinationDescending,
    /// Smallest volume first.
    VolumeAscending,
    /// Largest volume first.
    VolumeDescending,
}

impl ParcelOrder {
    /// Rule name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DestinationAscending => "DEST-ASC",
            Self::DestinationDescending => "DEST-DESC",
            Self::VolumeAscending => "VOL-ASC",
            Self::VolumeDescending => "VOL-DESC",
        }
    }

    /// Rule description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::DestinationAscending => "Destination, non-decreasing",
            Self::DestinationDescending => "Destination, non-increasing",
            Self::VolumeAscending => "Volume, non-decreasing",
            Self::VolumeDescending => "Volume, non-increasing",
        }
    }
}

impl Priority<Parcel> for ParcelOrder {
    fn higher_priority(&self, a: &Parcel, b: &Parcel) -> bool {
        match self {
            Self::DestinationAscending => a.destination < b.destination,
            Self::DestinationDescending => a.destination > b.destination,
            Self::VolumeAscending => a.volume < b.volume,
            Self::VolumeDescending => a.volume > b.volume,
        }
    }
}

// ======================== Truck rules ========================

/// How to choose among trucks that can all take a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TruckOrder {
    /// Truck with the least remaining space.
    LeastSpaceFirst,
    /// Truck with the most remaining space.
    MostSpaceFirst,
}

impl TruckOrder {
    /// Rule name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LeastSpaceFirst => "LEAST-SPACE",
            Self::MostSpaceFirst => "MOST-SPACE",
        }
    }

    /// Picks one of `candidates` (indices into `trucks`).
    ///
    /// Returns the chosen truck index, or `None` if `candidates` is empty.
    /// On equal remaining space the candidate listed first wins.
    pub fn select(&self, trucks: &[Truck], candidates: &[usize]) -> Option<usize> {
        let (&first, rest) = candidates.split_first()?;
        let mut best = first;
        for &idx in rest {
            let space = trucks[idx].remaining_space();
            let best_space = trucks[best].remaining_space();
            let better = match self {
                Self::LeastSpaceFirst => space < best_space,
                Self::MostSpaceFirst => space > best_space,
            };
            if better {
                best = idx;
            }
        }
        Some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(volume: u32, destination: &str) -> Parcel {
        Parcel::new(0, volume, "Toronto", destination)
    }

    #[test]
    fn test_destination_rules() {
        let hamilton = Parcel::new(1, 10, "Toronto", "Hamilton");
        let vancouver = Parcel::new(2, 5, "London", "Vancouver");
        assert!(ParcelOrder::DestinationAscending.higher_priority(&hamilton, &vancouver));
        assert!(!ParcelOrder::DestinationDescending.higher_priority(&hamilton, &vancouver));
        assert!(ParcelOrder::DestinationDescending.higher_priority(&vancouver, &hamilton));
    }

    #[test]
    fn test_volume_rules() {
        let big = p(10, "Hamilton");
        let small = p(5, "Vancouver");
        assert!(!ParcelOrder::VolumeAscending.higher_priority(&big, &small));
        assert!(ParcelOrder::VolumeDescending.higher_priority(&big, &small));
    }

    #[test]
    fn test_parcel_rules_are_strict() {
        let a = p(7, "Guelph");
        let b = p(7, "Guelph");
        for order in [
            ParcelOrder::DestinationAscending,
            ParcelOrder::DestinationDescending,
            ParcelOrder::VolumeAscending,
            ParcelOrder::VolumeDescending,
        ] {
            assert!(!order.higher_priority(&a, &b), "{}", order.name());
            assert!(!order.higher_priority(&b, &a), "{}", order.name());
        }
    }

    #[test]
    fn test_rule_descriptions() {
        assert_eq!(ParcelOrder::VolumeDescending.description(), "Volume, non-increasing");
        assert_eq!(
            ParcelOrder::DestinationAscending.description(),
            "Destination, non-decreasing"
        );
        assert_eq!(TruckOrder::MostSpaceFirst.name(), "MOST-SPACE");
    }

    fn trucks() -> Vec<Truck> {
        let mut t1 = Truck::new(100, 20, "Toronto");
        t1.pack(&p(11, "Hamilton"));
        let t2 = Truck::new(200, 10, "Toronto");
        vec![t1, t2]
    }

    #[test]
    fn test_least_space_first() {
        let trucks = trucks();
        // t1 has 9 left, t2 has 10.
        assert_eq!(TruckOrder::LeastSpaceFirst.select(&trucks, &[0, 1]), Some(0));
    }

    #[test]
    fn test_most_space_first() {
        let trucks = trucks();
        assert_eq!(TruckOrder::MostSpaceFirst.select(&trucks, &[0, 1]), Some(1));
    }

    #[test]
    fn test_select_tie_keeps_first() {
        let trucks = vec![
            Truck::new(1, 30, "York"),
            Truck::new(2, 30, "York"),
            Truck::new(3, 30, "York"),
        ];
        assert_eq!(TruckOrder::LeastSpaceFirst.select(&trucks, &[1, 2, 0]), Some(1));
        assert_eq!(TruckOrder::MostSpaceFirst.select(&trucks, &[2, 0, 1]), Some(2));
    }

    #[test]
    fn test_select_empty() {
        assert_eq!(TruckOrder::LeastSpaceFirst.select(&trucks(), &[]), None);
    }
}
