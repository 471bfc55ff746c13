//! Swap mutation over a whole generation.

use super::{GenomeRng, Population};

/// Give each arrangement one chance, with probability `rate`, of a single
/// swap of two distinct seats.
///
/// Consumes the generation and returns it, so there is no question of which
/// population is being mutated. Draws happen in member order to keep runs
/// reproducible under a fixed seed.
pub fn mutate(mut population: Population, rate: f32, rng: &mut GenomeRng) -> Population {
    let mut swapped = 0usize;
    for arrangement in population.iter_mut() {
        if rng.mutate(arrangement, rate) {
            swapped += 1;
        }
    }
    log::trace!("mutated {} of {} arrangements", swapped, population.len());
    population
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::evolution::arrangement_distance;

    #[test]
    fn test_rate_zero_leaves_generation_unchanged() {
        let mut rng = GenomeRng::new(42);
        let population = Population::initialize(8, 16, &mut rng);
        let mutated = mutate(population.clone(), 0.0, &mut rng);
        assert_eq!(mutated, population);
    }

    #[test]
    fn test_rate_one_swaps_every_member_once() {
        let mut rng = GenomeRng::new(42);
        let population = Population::initialize(8, 16, &mut rng);
        let mutated = mutate(population.clone(), 1.0, &mut rng);

        assert_eq!(mutated.len(), population.len());
        for (before, after) in population.iter().zip(mutated.iter()) {
            assert_eq!(arrangement_distance(before, after), 2);
        }
    }

    #[test]
    fn test_mutation_preserves_permutations() {
        let mut rng = GenomeRng::new(3);
        let population = Population::initialize(5, 32, &mut rng);
        let mutated = mutate(population, 0.5, &mut rng);

        for arrangement in &mutated {
            let mut ids = arrangement.as_slice().to_vec();
            ids.sort_unstable();
            assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        }
    }
}
