//! Social seating - evolutionary search for seating orders.
//!
//! Given a symmetric affinity matrix over N people, this crate searches for
//! the order in which to seat them in a row so that neighbours get along as
//! well as possible. The score of an arrangement ("etotal") sums the affinity
//! of every pair of adjacent seats in both directions.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration, arrangement and result types
//! - `compute`: Affinity graph, fitness and the genetic algorithm
//!
//! # Example
//!
//! ```rust,no_run
//! use social_seating::{EvolutionConfig, EvolutionEngine, GraphConfig};
//!
//! let config = EvolutionConfig {
//!     graph: GraphConfig {
//!         weights: vec![
//!             vec![0.0, 2.0, 0.0],
//!             vec![2.0, 0.0, 1.0],
//!             vec![0.0, 1.0, 0.0],
//!         ],
//!     },
//!     max_generations: 50,
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut engine = EvolutionEngine::new(config).expect("valid config");
//! let result = engine.run();
//!
//! println!("Best arrangement {} scores {}", result.best.arrangement, result.best.best_fitness);
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::AffinityGraph;
pub use compute::evolution::{EvolutionEngine, FitnessEvaluator};
pub use schema::{Arrangement, EvolutionConfig, EvolutionResult, GraphConfig};
