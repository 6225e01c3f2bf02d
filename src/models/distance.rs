//! Distance table between cities.
//!
//! Distances are directed: the distance from A to B may differ from the
//! distance from B to A. Lookups of unrecorded pairs return `None`.

use std::collections::HashMap;

/// Anything that can report the distance between two cities.
///
/// Truck and fleet distance queries accept any implementor, so callers may
/// back them with a precomputed table or a routing service.
pub trait DistanceLookup {
    /// Distance from `from` to `to`, or `None` if unknown.
    fn distance(&self, from: &str, to: &str) -> Option<u32>;
}

/// An in-memory table of city-to-city distances.
#[derive(Debug, Clone, Default)]
pub struct DistanceMap {
    distances: HashMap<(String, String), u32>,
}

impl DistanceMap {
    /// Creates an empty distance map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the distance from `a` to `b` and from `b` to `a`.
    ///
    /// When `reverse` is `None` the pair is symmetric. Existing entries are
    /// overwritten.
    pub fn add_distance(&mut self, a: &str, b: &str, forward: u32, reverse: Option<u32>) {
        self.distances
            .insert((a.to_string(), b.to_string()), forward);
        self.distances
            .insert((b.to_string(), a.to_string()), reverse.unwrap_or(forward));
    }

    /// Builder form of [`add_distance`](Self::add_distance) for symmetric pairs.
    pub fn with_distance(mut self, a: &str, b: &str, distance: u32) -> Self {
        self.add_distance(a, b, distance, None);
        self
    }

    /// Number of directed entries recorded.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Whether no distances are recorded.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

impl DistanceLookup for DistanceMap {
    fn distance(&self, from: &str, to: &str) -> Option<u32> {
        self.distances
            .get(&(from.to_string(), to.to_string()))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_distance() {
        let mut m = DistanceMap::new();
        assert_eq!(m.distance("Montreal", "Toronto"), None);
        m.add_distance("Montreal", "Toronto", 4, None);
        assert_eq!(m.distance("Montreal", "Toronto"), Some(4));
    }

    #[test]
    fn test_symmetric_by_default() {
        let m = DistanceMap::new().with_distance("Toronto", "Vancouver", 1000);
        assert_eq!(m.distance("Toronto", "Vancouver"), Some(1000));
        assert_eq!(m.distance("Vancouver", "Toronto"), Some(1000));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_asymmetric() {
        let mut m = DistanceMap::new();
        m.add_distance("Toronto", "Vancouver", 1000, Some(1001));
        assert_eq!(m.distance("Toronto", "Vancouver"), Some(1000));
        assert_eq!(m.distance("Vancouver", "Toronto"), Some(1001));
        assert_eq!(m.distance("Toronto", "Hamilton"), None);
    }

    #[test]
    fn test_overwrite() {
        let mut m = DistanceMap::new();
        m.add_distance("Toronto", "Hamilton", 900, None);
        m.add_distance("Toronto", "Hamilton", 70, Some(75));
        assert_eq!(m.distance("Toronto", "Hamilton"), Some(70));
        assert_eq!(m.distance("Hamilton", "Toronto"), Some(75));
    }
}
