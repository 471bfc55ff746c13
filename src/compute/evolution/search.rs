//! Generational loop for seating-order search.

use std::sync::Arc;
use std::time::Instant;

use crate::compute::AffinityGraph;
use crate::schema::{
    EvolutionConfig, EvolutionConfigError, EvolutionHistory, EvolutionPhase, EvolutionProgress,
    EvolutionResult, EvolutionStats,
};

use super::archive::HallOfFame;
use super::fitness::{FitnessEvaluator, best_index};
use super::genome::GenomeRng;
use super::mutation::mutate;
use super::population::Population;
use super::reproduction::reproduce;
use super::selection::select_with_scores;

/// Evolution engine that runs the search.
///
/// Owns the population, the random source and the hall of fame. Each
/// [`step`](Self::step) runs selection, reproduction, progress recording and
/// mutation, in that order, and replaces the population with the result.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    seed: u64,
    rng: GenomeRng,
    evaluator: FitnessEvaluator,
    population: Population,
    hall_of_fame: HallOfFame,
    history: EvolutionHistory,
    phase: EvolutionPhase,
    generation: usize,
    evaluations: u64,
}

impl EvolutionEngine {
    /// Validate `config` and create the initial population.
    pub fn new(config: EvolutionConfig) -> Result<Self, EvolutionConfigError> {
        config.validate()?;
        let graph = AffinityGraph::from_config(&config.graph)?;

        let seed = config.random_seed.unwrap_or_else(rand::random);
        let mut rng = GenomeRng::new(seed);
        let population = Population::initialize(graph.size(), config.population_size, &mut rng);

        log::info!(
            "seating search: {} individuals, population {}, {} generations, mutation rate {}, seed {}",
            graph.size(),
            config.population_size,
            config.max_generations,
            config.mutation_rate,
            seed
        );

        Ok(Self {
            config,
            seed,
            rng,
            evaluator: FitnessEvaluator::new(Arc::new(graph)),
            population,
            hall_of_fame: HallOfFame::new(),
            history: EvolutionHistory::default(),
            phase: EvolutionPhase::Initialized,
            generation: 0,
            evaluations: 0,
        })
    }

    /// Seed the random source was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn hall_of_fame(&self) -> &HallOfFame {
        &self.hall_of_fame
    }

    pub fn history(&self) -> &EvolutionHistory {
        &self.history
    }

    pub fn phase(&self) -> EvolutionPhase {
        self.phase
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    fn score(&mut self, population: &Population) -> Vec<f32> {
        self.evaluations += population.len() as u64;
        self.evaluator.evaluate_population(population)
    }

    /// Run one generation. Returns `false` once the run is complete.
    pub fn step(&mut self) -> bool {
        if self.phase == EvolutionPhase::Completed {
            return false;
        }

        let population = std::mem::take(&mut self.population);
        let scores = self.score(&population);
        let selection = select_with_scores(population, &scores);
        let median = selection.median;
        let eliminated = selection.eliminated_count;

        let next = reproduce(selection, &mut self.rng);

        // Progress is taken from the reproduced generation, before mutation.
        let generation = self.generation + 1;
        let scores = self.score(&next);
        if let Some((idx, best)) = best_index(&scores) {
            self.hall_of_fame
                .record(generation, best, next.as_slice()[idx].clone());
            self.history.best_fitness.push(best);
        }
        self.history.median_fitness.push(median);
        self.history.eliminated.push(eliminated);

        let mut next = mutate(next, self.config.mutation_rate, &mut self.rng);
        if self.config.elitism {
            self.reinsert_champion(&mut next);
        }

        self.population = next;
        self.generation = generation;
        self.phase = if generation >= self.config.max_generations {
            EvolutionPhase::Completed
        } else {
            EvolutionPhase::Running { generation }
        };

        log::debug!(
            "generation {}: best {:.3}, median {:.3}, eliminated {}",
            generation,
            self.history.best_fitness.last().copied().unwrap_or_default(),
            median,
            eliminated
        );

        true
    }

    /// Put the best arrangement seen so far back in place of the weakest
    /// member, unless it is already present.
    fn reinsert_champion(&mut self, population: &mut Population) {
        let Some(champion) = self.hall_of_fame.champion() else {
            return;
        };
        if population.contains(&champion.arrangement) {
            return;
        }
        let champion = champion.arrangement.clone();

        let scores = self.score(population);
        let weakest = scores
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i);
        if let Some(idx) = weakest {
            population.replace(idx, champion);
        }
    }

    /// Get current progress.
    pub fn progress(&self) -> EvolutionProgress {
        EvolutionProgress {
            generation: self.generation,
            total_generations: self.config.max_generations,
            generation_best: self
                .history
                .best_fitness
                .last()
                .copied()
                .unwrap_or(f32::NEG_INFINITY),
            best_fitness: self
                .hall_of_fame
                .champion()
                .map_or(f32::NEG_INFINITY, |c| c.best_fitness),
            median_fitness: self.history.median_fitness.last().copied().unwrap_or(0.0),
            eliminated: self.history.eliminated.last().copied().unwrap_or(0),
            phase: self.phase,
        }
    }

    /// Run evolution to completion, reporting after every generation.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> EvolutionResult
    where
        F: FnMut(&EvolutionProgress),
    {
        let start_time = Instant::now();

        while self.step() {
            callback(&self.progress());
        }

        let elapsed = start_time.elapsed().as_secs_f64();

        let population = self.population.clone();
        let final_scores = self.score(&population);
        let final_avg_fitness = if final_scores.is_empty() {
            0.0
        } else {
            final_scores.iter().sum::<f32>() / final_scores.len() as f32
        };

        // Validation guarantees at least one generation, hence one record.
        let best = self
            .hall_of_fame
            .champion()
            .cloned()
            .expect("No generations recorded");

        log::info!(
            "seating search complete after {} generations: best etotal {:.3} for {}",
            self.generation,
            best.best_fitness,
            best.arrangement
        );

        EvolutionResult {
            stats: EvolutionStats {
                generations: self.generation,
                total_evaluations: self.evaluations,
                best_fitness: best.best_fitness,
                final_avg_fitness,
                elapsed_seconds: elapsed,
            },
            best,
            hall_of_fame: self.hall_of_fame.records().to_vec(),
            history: self.history.clone(),
        }
    }

    /// Run evolution (blocking).
    pub fn run(&mut self) -> EvolutionResult {
        self.run_with_callback(|_| {})
    }
}
