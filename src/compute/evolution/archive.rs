//! Hall of fame: the best arrangement of every generation.

use crate::schema::{Arrangement, ProgressRecord};

/// Append-only record of per-generation champions.
#[derive(Debug, Clone, Default)]
pub struct HallOfFame {
    records: Vec<ProgressRecord>,
    /// Index of the best record so far (earliest on ties).
    champion: Option<usize>,
}

impl HallOfFame {
    /// Create an empty hall of fame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's best arrangement.
    pub fn record(&mut self, generation: usize, best_fitness: f32, arrangement: Arrangement) {
        let improved = match self.champion {
            Some(idx) => best_fitness > self.records[idx].best_fitness,
            None => true,
        };
        if improved {
            self.champion = Some(self.records.len());
        }

        self.records.push(ProgressRecord {
            generation,
            best_fitness,
            arrangement,
        });
    }

    /// Best record across all generations; the earliest wins ties.
    pub fn champion(&self) -> Option<&ProgressRecord> {
        self.champion.map(|idx| &self.records[idx])
    }

    /// All records in generation order.
    pub fn records(&self) -> &[ProgressRecord] {
        &self.records
    }

    /// Best fitness per generation, for a convergence curve.
    pub fn fitness_curve(&self) -> Vec<f32> {
        self.records.iter().map(|r| r.best_fitness).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
