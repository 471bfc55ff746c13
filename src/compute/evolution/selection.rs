//! Median truncation selection.

use super::{FitnessEvaluator, Population};

/// Outcome of one selection pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Members scoring at or above the median, in original order.
    pub survivors: Population,
    /// How many members fell strictly below the median.
    pub eliminated_count: usize,
    /// The threshold used.
    pub median: f32,
}

/// Median of `scores`: the middle value for odd lengths, the mean of the two
/// middle values for even lengths. `None` when empty.
pub fn median(scores: &[f32]) -> Option<f32> {
    if scores.is_empty() {
        return None;
    }

    let mut sorted = scores.to_vec();
    sorted.sort_by(f32::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some(midpoint(sorted[mid - 1], sorted[mid]))
    }
}

/// Mean of `lo <= hi` without overflowing near `f32::MAX`.
fn midpoint(lo: f32, hi: f32) -> f32 {
    if lo == hi {
        // Also covers two infinite scores, where `hi - lo` is NaN.
        lo
    } else {
        lo + (hi - lo) / 2.0
    }
}

/// Drop every member whose score is strictly below the median.
///
/// `scores` must be aligned with `population`.
pub fn select_with_scores(population: Population, scores: &[f32]) -> Selection {
    debug_assert_eq!(population.len(), scores.len());

    let Some(median) = median(scores) else {
        return Selection {
            survivors: population,
            eliminated_count: 0,
            median: 0.0,
        };
    };

    let total = population.len();
    let survivors: Population = population
        .into_iter()
        .zip(scores)
        .filter(|&(_, &score)| score >= median)
        .map(|(arrangement, _)| arrangement)
        .collect();

    Selection {
        eliminated_count: total - survivors.len(),
        survivors,
        median,
    }
}

/// Score the population and apply median truncation.
pub fn select(population: Population, evaluator: &FitnessEvaluator) -> Selection {
    let scores = evaluator.evaluate_population(&population);
    select_with_scores(population, &scores)
}
