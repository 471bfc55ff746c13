//! Evolutionary search for seating arrangements.
//!
//! # Overview
//!
//! Each generation runs the same pipeline:
//!
//! - **Selection** (`selection`): every arrangement scoring strictly below the
//!   population median is eliminated
//! - **Reproduction** (`reproduction`): survivors are picked at random (with
//!   replacement) and each child keeps its parent's first half of the seats,
//!   with the second half shuffled
//! - **Progress** (`archive`): the best arrangement of the reproduced
//!   generation is recorded in the hall of fame
//! - **Mutation** (`mutation`): each arrangement swaps two seats with
//!   probability `mutation_rate`
//!
//! Fitness (`fitness`) is the sum of affinities between neighbouring seats,
//! counted in both directions.
//!
//! # Example
//!
//! ```rust,no_run
//! use social_seating::schema::EvolutionConfig;
//! use social_seating::compute::evolution::EvolutionEngine;
//!
//! let config = EvolutionConfig {
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut engine = EvolutionEngine::new(config).expect("valid config");
//! let result = engine.run_with_callback(|progress| {
//!     println!("Generation {}: best etotal = {:.3}",
//!         progress.generation, progress.generation_best);
//! });
//!
//! println!("Best arrangement: {} ({:.3})", result.best.arrangement, result.best.best_fitness);
//! ```

mod archive;
mod fitness;
mod genome;
mod mutation;
mod population;
mod reproduction;
mod search;
mod selection;

pub use archive::HallOfFame;
pub use fitness::{FitnessEvaluator, best_index};
pub use genome::{GenomeRng, arrangement_distance};
pub use mutation::mutate;
pub use population::Population;
pub use reproduction::reproduce;
pub use search::EvolutionEngine;
pub use selection::{Selection, median, select, select_with_scores};
