//! Fitness evaluation for seating arrangements.
//!
//! The objective ("etotal") sums, over every pair of neighbouring seats, the
//! affinity in both directions. The graph is symmetric, so each adjacent pair
//! effectively contributes twice its weight; existing scores depend on this.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::compute::AffinityGraph;
use crate::schema::Arrangement;

use super::Population;

/// Scores arrangements against a shared affinity graph.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    graph: Arc<AffinityGraph>,
}

impl FitnessEvaluator {
    /// Create a new fitness evaluator.
    pub fn new(graph: Arc<AffinityGraph>) -> Self {
        Self { graph }
    }

    /// The graph being scored against.
    pub fn graph(&self) -> &AffinityGraph {
        &self.graph
    }

    /// Etotal of a single arrangement.
    ///
    /// # Panics
    ///
    /// If the arrangement does not seat exactly the graph's individuals.
    pub fn evaluate(&self, arrangement: &Arrangement) -> f32 {
        assert_eq!(
            arrangement.len(),
            self.graph.size(),
            "arrangement of {} seats scored against a graph of {} individuals",
            arrangement.len(),
            self.graph.size()
        );

        arrangement
            .as_slice()
            .windows(2)
            .map(|pair| {
                let (u, v) = (pair[0] - 1, pair[1] - 1);
                self.graph.weight(u, v) + self.graph.weight(v, u)
            })
            .sum()
    }

    /// Score every member, in population order.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn evaluate_population(&self, population: &Population) -> Vec<f32> {
        population
            .as_slice()
            .par_iter()
            .map(|arrangement| self.evaluate(arrangement))
            .collect()
    }

    #[cfg(target_arch = "wasm32")]
    pub fn evaluate_population(&self, population: &Population) -> Vec<f32> {
        population
            .iter()
            .map(|arrangement| self.evaluate(arrangement))
            .collect()
    }
}

/// Index and value of the first maximum score.
pub fn best_index(scores: &[f32]) -> Option<(usize, f32)> {
    scores
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, score)| match best {
            Some((_, top)) if top >= score => best,
            _ => Some((i, score)),
        })
}
