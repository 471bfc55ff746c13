//! Evolution configuration and result types for seating-order search.
//!
//! This module provides the types for configuring the genetic algorithm and
//! for reporting its progress (convergence curve, hall of fame, champion).

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Arrangement, ConfigError, GraphConfig};

/// Top-level configuration for the seating optimizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Affinity matrix to optimize over.
    #[serde(default)]
    pub graph: GraphConfig,
    /// Number of arrangements per generation.
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Probability that an arrangement gets one swap per generation (0.0-1.0).
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f32,
    /// Number of generations to run.
    #[serde(default = "default_max_generations")]
    pub max_generations: usize,
    /// Re-insert the best arrangement seen so far into each new generation.
    #[serde(default)]
    pub elitism: bool,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            graph: GraphConfig::default(),
            population_size: default_population_size(),
            mutation_rate: default_mutation_rate(),
            max_generations: default_max_generations(),
            elitism: false,
            random_seed: None,
        }
    }
}

fn default_population_size() -> usize {
    16
}
fn default_mutation_rate() -> f32 {
    0.05
}
fn default_max_generations() -> usize {
    500
}

// ============================================================================
// Progress and Result Types
// ============================================================================

/// Best arrangement of one generation ("hall of fame" entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Generation the record was taken in (1-based).
    pub generation: usize,
    /// Highest etotal in that generation's population.
    pub best_fitness: f32,
    /// First arrangement achieving `best_fitness`.
    pub arrangement: Arrangement,
}

/// Evolution history for plotting.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EvolutionHistory {
    /// Best fitness per generation.
    pub best_fitness: Vec<f32>,
    /// Median fitness per generation (the selection threshold).
    pub median_fitness: Vec<f32>,
    /// Number of arrangements eliminated per generation.
    pub eliminated: Vec<usize>,
}

/// Lifecycle of an evolution run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EvolutionPhase {
    /// Initial population created, no generation run yet.
    #[default]
    Initialized,
    /// `generation` generations have completed.
    Running { generation: usize },
    /// Generation budget exhausted.
    Completed,
}

/// Progress update passed to run callbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionProgress {
    /// Generations completed.
    pub generation: usize,
    /// Total generations planned.
    pub total_generations: usize,
    /// Best fitness in the generation just recorded.
    pub generation_best: f32,
    /// Best fitness recorded so far.
    pub best_fitness: f32,
    /// Selection threshold used this generation.
    pub median_fitness: f32,
    /// Arrangements replaced by offspring this generation.
    pub eliminated: usize,
    /// Current phase.
    pub phase: EvolutionPhase,
}

/// Final result of an evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionResult {
    /// Best arrangement across all generations (earliest on ties).
    pub best: ProgressRecord,
    /// One record per generation.
    pub hall_of_fame: Vec<ProgressRecord>,
    /// Statistics from the run.
    pub stats: EvolutionStats,
    /// Full history for analysis.
    pub history: EvolutionHistory,
}

/// Statistics from an evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Total generations run.
    pub generations: usize,
    /// Total fitness evaluations performed.
    pub total_evaluations: u64,
    /// Best fitness achieved.
    pub best_fitness: f32,
    /// Average fitness of final population.
    pub final_avg_fitness: f32,
    /// Time taken (in seconds).
    pub elapsed_seconds: f64,
}

// ============================================================================
// Validation
// ============================================================================

/// Evolution configuration validation errors.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EvolutionConfigError {
    #[error("Population size must be non-zero")]
    EmptyPopulation,
    #[error("Mutation rate {0} must be within [0, 1]")]
    InvalidMutationRate(f32),
    #[error("Generation budget must be non-zero")]
    NoGenerations,
    #[error("Graph config validation failed: {0}")]
    GraphConfigError(#[from] ConfigError),
}

impl EvolutionConfig {
    /// Validate evolution configuration.
    pub fn validate(&self) -> Result<(), EvolutionConfigError> {
        self.graph.validate()?;

        if self.population_size == 0 {
            return Err(EvolutionConfigError::EmptyPopulation);
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvolutionConfigError::InvalidMutationRate(
                self.mutation_rate,
            ));
        }

        if self.max_generations == 0 {
            return Err(EvolutionConfigError::NoGenerations);
        }

        Ok(())
    }

    /// Load and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Errors from [`EvolutionConfig::load`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Error reading config file: {0}")]
    Io(#[from] io::Error),
    #[error("Error parsing config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(#[from] EvolutionConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_valid() {
        let config = EvolutionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.population_size, 16);
        assert_eq!(config.max_generations, 500);
        assert!(!config.elitism);
    }

    #[test]
    fn test_invalid_configs() {
        let config = EvolutionConfig {
            population_size: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(EvolutionConfigError::EmptyPopulation)
        );

        let config = EvolutionConfig {
            mutation_rate: 1.5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(EvolutionConfigError::InvalidMutationRate(1.5))
        );

        let config = EvolutionConfig {
            mutation_rate: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EvolutionConfigError::InvalidMutationRate(_))
        ));

        let config = EvolutionConfig {
            max_generations: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(EvolutionConfigError::NoGenerations));

        let config = EvolutionConfig {
            graph: GraphConfig { weights: vec![] },
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(EvolutionConfigError::GraphConfigError(ConfigError::EmptyGraph))
        );
    }

    #[test]
    fn test_mutation_rate_bounds_inclusive() {
        for rate in [0.0, 1.0] {
            let config = EvolutionConfig {
                mutation_rate: rate,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_serialization_defaults() {
        let parsed: EvolutionConfig =
            serde_json::from_str(r#"{ "max_generations": 20, "random_seed": 7 }"#).unwrap();
        assert_eq!(parsed.population_size, 16);
        assert_eq!(parsed.max_generations, 20);
        assert_eq!(parsed.random_seed, Some(7));
        assert_eq!(parsed.graph, GraphConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seating.json");

        let config = EvolutionConfig {
            population_size: 8,
            random_seed: Some(42),
            ..Default::default()
        };
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = EvolutionConfig::load(&path).unwrap();
        assert_eq!(loaded.population_size, 8);
        assert_eq!(loaded.random_seed, Some(42));
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();

        let missing = EvolutionConfig::load(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(LoadError::Io(_))));

        let garbled = dir.path().join("garbled.json");
        fs::write(&garbled, "{ not json").unwrap();
        assert!(matches!(
            EvolutionConfig::load(&garbled),
            Err(LoadError::Parse(_))
        ));

        let invalid = dir.path().join("invalid.json");
        fs::write(&invalid, r#"{ "population_size": 0 }"#).unwrap();
        assert!(matches!(
            EvolutionConfig::load(&invalid),
            Err(LoadError::Invalid(EvolutionConfigError::EmptyPopulation))
        ));
    }
}
