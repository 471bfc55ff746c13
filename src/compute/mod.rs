//! Compute module - Affinity graph and evolutionary search.

mod graph;

pub mod evolution;

pub use graph::*;
