//! Random problem generation.
//!
//! Produces parcels and trucks for experiments. Each parcel gets a random
//! source city and a destination that is neither its source nor the
//! depot; IDs are drawn without replacement so they are unique.
//!
//! # Usage
//!
//! ```
//! use parcel_schedule::generator::{generate, GeneratorSettings};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let data = generate(&GeneratorSettings::default(), &mut rng).unwrap();
//! assert_eq!(data.parcels.len(), 15);
//! assert_eq!(data.trucks.len(), 5);
//! ```

use std::ops::RangeInclusive;

use rand::prelude::IndexedRandom;
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{Parcel, Truck};

/// Knobs controlling generated data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Number of parcels to generate.
    pub num_parcels: usize,
    /// Parcel IDs are drawn from `0..parcel_id_pool`.
    pub parcel_id_pool: u32,
    /// Cities used as sources and destinations.
    pub cities: Vec<String>,
    /// Parcel volume range.
    pub parcel_volume: RangeInclusive<u32>,
    /// City every truck starts from.
    pub depot: String,
    /// Number of trucks to generate.
    pub num_trucks: usize,
    /// Truck IDs are drawn from `0..truck_id_pool`.
    pub truck_id_pool: u32,
    /// Truck capacity range.
    pub truck_capacity: RangeInclusive<u32>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            num_parcels: 15,
            parcel_id_pool: 20,
            cities: ["Belleville", "Guelph", "Hamilton", "Toronto", "London", "Ottawa"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            parcel_volume: 5..=25,
            depot: "Toronto".to_string(),
            num_trucks: 5,
            truck_id_pool: 10,
            truck_capacity: 20..=50,
        }
    }
}

impl GeneratorSettings {
    /// Checks that the settings can produce data.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_parcels > self.parcel_id_pool as usize {
            return Err(ConfigError::Invalid {
                key: "num_parcels",
                reason: "exceeds the parcel ID pool",
            });
        }
        if self.num_trucks > self.truck_id_pool as usize {
            return Err(ConfigError::Invalid {
                key: "num_trucks",
                reason: "exceeds the truck ID pool",
            });
        }
        if self.parcel_volume.is_empty() || *self.parcel_volume.start() == 0 {
            return Err(ConfigError::Invalid {
                key: "parcel_volume",
                reason: "must be a non-empty range of positive volumes",
            });
        }
        if self.truck_capacity.is_empty() || *self.truck_capacity.start() == 0 {
            return Err(ConfigError::Invalid {
                key: "truck_capacity",
                reason: "must be a non-empty range of positive capacities",
            });
        }
        let mut destinations: Vec<&String> =
            self.cities.iter().filter(|c| **c != self.depot).collect();
        destinations.sort();
        destinations.dedup();
        if self.num_parcels > 0 && destinations.len() < 2 {
            return Err(ConfigError::Invalid {
                key: "cities",
                reason: "needs at least two cities besides the depot",
            });
        }
        Ok(())
    }
}

/// Generated problem data.
#[derive(Debug, Clone)]
pub struct GeneratedData {
    /// Parcels with unique IDs.
    pub parcels: Vec<Parcel>,
    /// Empty trucks at the depot, with unique IDs.
    pub trucks: Vec<Truck>,
}

/// Generates parcels and trucks according to `settings`.
pub fn generate<R: Rng + ?Sized>(
    settings: &GeneratorSettings,
    rng: &mut R,
) -> Result<GeneratedData, ConfigError> {
    settings.validate()?;

    let parcel_ids = index::sample(rng, settings.parcel_id_pool as usize, settings.num_parcels);
    let mut parcels = Vec::with_capacity(settings.num_parcels);
    for id in parcel_ids {
        let Some(source) = settings.cities.choose(rng) else {
            break;
        };
        let options: Vec<&String> = settings
            .cities
            .iter()
            .filter(|c| *c != source && **c != settings.depot)
            .collect();
        let Some(destination) = options.choose(rng) else {
            break;
        };
        let volume = rng.random_range(settings.parcel_volume.clone());
        parcels.push(Parcel::new(id as u32, volume, source.as_str(), destination.as_str()));
    }

    let truck_ids = index::sample(rng, settings.truck_id_pool as usize, settings.num_trucks);
    let trucks = truck_ids
        .into_iter()
        .map(|id| {
            let capacity = rng.random_range(settings.truck_capacity.clone());
            Truck::new(id as u32, capacity, settings.depot.as_str())
        })
        .collect();

    Ok(GeneratedData { parcels, trucks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_input;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_generation() {
        let settings = GeneratorSettings::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let data = generate(&settings, &mut rng).unwrap();

        assert_eq!(data.parcels.len(), 15);
        assert_eq!(data.trucks.len(), 5);
        assert!(validate_input(&data.parcels, &data.trucks).is_ok());

        for p in &data.parcels {
            assert!(p.id < 20);
            assert!(settings.parcel_volume.contains(&p.volume));
            assert_ne!(p.source, p.destination);
            assert_ne!(p.destination, "Toronto");
        }
        for t in &data.trucks {
            assert!(t.id() < 10);
            assert!(settings.truck_capacity.contains(&t.capacity()));
            assert_eq!(t.depot(), "Toronto");
            assert!(t.is_empty());
        }
    }

    #[test]
    fn test_reproducible() {
        let settings = GeneratorSettings::default();
        let a = generate(&settings, &mut SmallRng::seed_from_u64(5)).unwrap();
        let b = generate(&settings, &mut SmallRng::seed_from_u64(5)).unwrap();
        assert_eq!(a.parcels, b.parcels);
        assert_eq!(a.trucks, b.trucks);
    }

    #[test]
    fn test_too_many_parcels() {
        let settings = GeneratorSettings {
            num_parcels: 30,
            ..Default::default()
        };
        let err = generate(&settings, &mut SmallRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "num_parcels", .. }));
    }

    #[test]
    fn test_not_enough_cities() {
        let settings = GeneratorSettings {
            cities: vec!["Toronto".into(), "Guelph".into()],
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_volume_range() {
        let settings = GeneratorSettings {
            parcel_volume: 0..=10,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::Invalid { key: "parcel_volume", .. })
        ));
    }

    #[test]
    fn test_empty_capacity_range() {
        let settings = GeneratorSettings {
            truck_capacity: RangeInclusive::new(50, 20),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::Invalid { key: "truck_capacity", .. })
        ));
    }
}
