//! End-to-end scheduling runs.
//!
//! A [`SchedulingExperiment`] ties together an [`ExperimentConfig`], the
//! input parcels and trucks, and a distance table. Running it validates the
//! input, builds a fleet parked at the configured depot, schedules with the
//! configured algorithm and summarises the result as [`FleetStats`].
//!
//! # Configuration
//!
//! ```json
//! {
//!     "depot_location": "York",
//!     "algorithm": "greedy",
//!     "parcel_priority": "volume",
//!     "parcel_order": "non-increasing",
//!     "truck_order": "non-decreasing",
//!     "verbose": "false"
//! }
//! ```
//!
//! The greedy keys are required only when `algorithm` is `greedy`. The
//! random algorithm accepts an optional `seed`.

use std::io::Read;

use log::info;
use serde::{Deserialize, Deserializer, Serialize};

use crate::data::{read_distances, read_parcels, read_trucks};
use crate::dispatching::{GreedyConfig, ParcelPriority, SortOrder};
use crate::error::{ConfigError, ExperimentError};
use crate::models::{DistanceMap, Fleet, Parcel, Truck};
use crate::scheduler::{FleetStats, GreedyScheduler, RandomScheduler, Scheduler};
use crate::validation::validate_input;

/// Scheduling algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// [`RandomScheduler`].
    Random,
    /// [`GreedyScheduler`].
    Greedy,
}

/// Settings for one experiment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// City every truck starts and ends at.
    pub depot_location: String,
    /// Which scheduler to run.
    pub algorithm: Algorithm,
    /// Greedy parcel attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parcel_priority: Option<ParcelPriority>,
    /// Greedy parcel direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parcel_order: Option<SortOrder>,
    /// Greedy truck tie-break direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truck_order: Option<SortOrder>,
    /// Log every scheduling decision at debug level.
    #[serde(default, deserialize_with = "flag")]
    pub verbose: bool,
    /// Seed for the random scheduler; entropy is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Text(s) => match s.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected `true` or `false`, found `{other}`"
            ))),
        },
    }
}

impl ExperimentConfig {
    /// A greedy experiment at `depot_location`.
    pub fn greedy(depot_location: impl Into<String>, config: GreedyConfig) -> Self {
        Self {
            depot_location: depot_location.into(),
            algorithm: Algorithm::Greedy,
            parcel_priority: Some(config.parcel_priority),
            parcel_order: Some(config.parcel_order),
            truck_order: Some(config.truck_order),
            verbose: false,
            seed: None,
        }
    }

    /// A random experiment at `depot_location`.
    pub fn random(depot_location: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            depot_location: depot_location.into(),
            algorithm: Algorithm::Random,
            parcel_priority: None,
            parcel_order: None,
            truck_order: None,
            verbose: false,
            seed,
        }
    }

    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse { source })
    }

    /// The greedy policy, failing if any of its keys is absent.
    pub fn greedy_config(&self) -> Result<GreedyConfig, ConfigError> {
        Ok(GreedyConfig::new(
            self.parcel_priority
                .ok_or(ConfigError::MissingKey { key: "parcel_priority" })?,
            self.parcel_order
                .ok_or(ConfigError::MissingKey { key: "parcel_order" })?,
            self.truck_order
                .ok_or(ConfigError::MissingKey { key: "truck_order" })?,
        ))
    }

    /// Builds the configured scheduler.
    pub fn build_scheduler(&self) -> Result<Box<dyn Scheduler>, ConfigError> {
        Ok(match self.algorithm {
            Algorithm::Greedy => Box::new(GreedyScheduler::from_config(&self.greedy_config()?)),
            Algorithm::Random => match self.seed {
                Some(seed) => Box::new(RandomScheduler::seeded(seed)),
                None => Box::new(RandomScheduler::from_entropy()),
            },
        })
    }
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct ExperimentOutcome {
    /// Trucks after scheduling.
    pub fleet: Fleet,
    /// Parcels no truck could take.
    pub unscheduled: Vec<Parcel>,
    /// Summary of the fleet.
    pub stats: FleetStats,
}

/// A configured scheduling run over fixed input.
#[derive(Debug, Clone)]
pub struct SchedulingExperiment {
    config: ExperimentConfig,
    parcels: Vec<Parcel>,
    trucks: Vec<Truck>,
    distances: DistanceMap,
}

impl SchedulingExperiment {
    /// Creates an experiment over loaded data.
    ///
    /// Only the ID and capacity of each truck are used; the fleet is
    /// rebuilt empty at the configured depot for every run.
    pub fn new(
        config: ExperimentConfig,
        parcels: Vec<Parcel>,
        trucks: Vec<Truck>,
        distances: DistanceMap,
    ) -> Self {
        Self {
            config,
            parcels,
            trucks,
            distances,
        }
    }

    /// Creates an experiment by reading parcel, truck and distance records.
    pub fn from_readers<P: Read, T: Read, D: Read>(
        config: ExperimentConfig,
        parcels: P,
        trucks: T,
        distances: D,
    ) -> Result<Self, ExperimentError> {
        let parcels = read_parcels(parcels)?;
        let trucks = read_trucks(trucks, &config.depot_location)?;
        let distances = read_distances(distances)?;
        Ok(Self::new(config, parcels, trucks, distances))
    }

    /// The run configuration.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// The input parcels.
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// Runs the experiment and returns the fleet statistics.
    pub fn run(&self) -> Result<FleetStats, ExperimentError> {
        Ok(self.execute()?.stats)
    }

    /// Runs the experiment and returns the scheduled fleet along with its
    /// statistics.
    pub fn execute(&self) -> Result<ExperimentOutcome, ExperimentError> {
        validate_input(&self.parcels, &self.trucks).map_err(ExperimentError::Validation)?;

        let depot = self.config.depot_location.as_str();
        let mut fleet = Fleet::from_trucks(
            self.trucks
                .iter()
                .map(|t| Truck::new(t.id(), t.capacity(), depot)),
        )?;
        let mut scheduler = self.config.build_scheduler()?;

        info!(
            "running {} scheduler: {} parcels, {} trucks, depot {}",
            scheduler.name(),
            self.parcels.len(),
            fleet.num_trucks(),
            depot
        );
        let unscheduled = scheduler.schedule(&self.parcels, fleet.trucks_mut(), self.config.verbose);
        let stats = FleetStats::calculate(&fleet, &self.distances, &unscheduled)?;

        Ok(ExperimentOutcome {
            fleet,
            unscheduled,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YORK_PARCELS: &str = "\
17, York, Toronto, 25
21, York, London, 10
13, York, London, 8
42, York, Toronto, 20
25, York, Toronto, 15
61, York, Hamilton, 15
76, York, London, 20
";

    const YORK_TRUCKS: &str = "1, 40\n2, 40\n3, 25\n";

    const YORK_DISTANCES: &str = "\
York, Toronto, 30
York, London, 200
York, Hamilton, 70
Toronto, London, 190
Toronto, Hamilton, 70
Hamilton, London, 130
";

    const GREEDY_JSON: &str = r#"{
        "depot_location": "York",
        "algorithm": "greedy",
        "parcel_priority": "volume",
        "parcel_order": "non-increasing",
        "truck_order": "non-decreasing",
        "verbose": "false"
    }"#;

    fn york(config: ExperimentConfig) -> SchedulingExperiment {
        SchedulingExperiment::from_readers(
            config,
            YORK_PARCELS.as_bytes(),
            YORK_TRUCKS.as_bytes(),
            YORK_DISTANCES.as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn test_greedy_york() {
        let experiment = york(ExperimentConfig::from_json(GREEDY_JSON).unwrap());
        let outcome = experiment.execute().unwrap();

        assert_eq!(outcome.unscheduled, vec![Parcel::new(13, 8, "York", "London")]);
        assert_eq!(outcome.fleet.parcel_allocations()[&2], vec![25, 61, 21]);

        let stats = outcome.stats;
        assert_eq!(stats.fleet, 3);
        assert_eq!(stats.unused_trucks, 0);
        assert_eq!(stats.unused_space, 0);
        assert_eq!(stats.unscheduled, 1);
        assert!((stats.avg_fullness - 100.0).abs() < 1e-10);
        // 420 + 430 + 60 over three trucks.
        assert!((stats.avg_distance - 910.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_greedy_constructor_matches_json() {
        let config = ExperimentConfig::greedy(
            "York",
            GreedyConfig::new(
                ParcelPriority::Volume,
                SortOrder::NonIncreasing,
                SortOrder::NonDecreasing,
            ),
        );
        assert_eq!(config, ExperimentConfig::from_json(GREEDY_JSON).unwrap());

        let experiment = york(config);
        assert_eq!(experiment.config().algorithm, Algorithm::Greedy);
        assert_eq!(experiment.parcels().len(), 7);
        assert_eq!(experiment.run().unwrap().unscheduled, 1);
    }

    #[test]
    fn test_run_is_repeatable() {
        let experiment = york(ExperimentConfig::from_json(GREEDY_JSON).unwrap());
        assert_eq!(experiment.run().unwrap(), experiment.run().unwrap());
    }

    #[test]
    fn test_random_seeded() {
        let experiment = york(ExperimentConfig::random("York", Some(11)));
        let a = experiment.run().unwrap();
        let b = experiment.run().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.fleet, 3);
    }

    #[test]
    fn test_verbose_flag_forms() {
        let parse = |verbose: &str| {
            ExperimentConfig::from_json(&format!(
                r#"{{"depot_location": "York", "algorithm": "random", "verbose": {verbose}}}"#
            ))
        };
        assert!(parse("true").unwrap().verbose);
        assert!(parse("\"true\"").unwrap().verbose);
        assert!(!parse("\"false\"").unwrap().verbose);
        assert!(parse("\"yes\"").is_err());
    }

    #[test]
    fn test_greedy_requires_policy_keys() {
        let config = ExperimentConfig::from_json(
            r#"{"depot_location": "York", "algorithm": "greedy", "parcel_priority": "volume"}"#,
        )
        .unwrap();
        let err = york(config).run().unwrap_err();
        assert!(matches!(
            err,
            ExperimentError::Config(ConfigError::MissingKey { key: "parcel_order" })
        ));
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = ExperimentConfig::from_json(r#"{"depot_location": "York", "algorithm": "annealing"}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let parcels = vec![
            Parcel::new(1, 5, "York", "London"),
            Parcel::new(1, 5, "York", "London"),
        ];
        let experiment = SchedulingExperiment::new(
            ExperimentConfig::random("York", Some(0)),
            parcels,
            vec![Truck::new(1, 10, "York")],
            DistanceMap::new(),
        );
        match experiment.run().unwrap_err() {
            ExperimentError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_distance() {
        let experiment = SchedulingExperiment::new(
            ExperimentConfig::random("York", Some(0)),
            vec![Parcel::new(1, 5, "York", "Windsor")],
            vec![Truck::new(1, 10, "York")],
            DistanceMap::new(),
        );
        assert!(matches!(experiment.run(), Err(ExperimentError::Distance(_))));
    }

    #[test]
    fn test_trucks_rebuilt_at_depot() {
        let experiment = SchedulingExperiment::new(
            ExperimentConfig::random("York", Some(0)),
            vec![Parcel::new(1, 5, "York", "London")],
            vec![Truck::new(1, 10, "Ottawa")],
            DistanceMap::new().with_distance("York", "London", 200),
        );
        let outcome = experiment.execute().unwrap();
        assert_eq!(outcome.fleet.trucks()[0].route(), ["York", "London", "York"]);
        assert!((outcome.stats.avg_distance - 400.0).abs() < 1e-10);
    }
}
