//! Arrangement manipulation utilities for evolutionary search.
//!
//! Provides random generation, breeding, and swap mutation. Every stochastic
//! step of a run draws from one [`GenomeRng`], so a fixed seed reproduces the
//! whole run.

use rand::prelude::*;

use crate::schema::Arrangement;

/// Random number generator wrapper for arrangement operations.
pub struct GenomeRng {
    rng: StdRng,
}

impl GenomeRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly shuffled permutation of `1..=n`.
    pub fn random_arrangement(&mut self, n: usize) -> Arrangement {
        let mut arrangement = Arrangement::identity(n);
        arrangement.seats_mut().shuffle(&mut self.rng);
        arrangement
    }

    /// Child of `parent`: the first `n / 2` seats copied verbatim, the rest
    /// shuffled among themselves.
    pub fn breed(&mut self, parent: &Arrangement) -> Arrangement {
        let half = parent.len() / 2;
        let mut seats = parent.as_slice().to_vec();
        seats[half..].shuffle(&mut self.rng);
        Arrangement::from_permutation(seats)
    }

    /// With probability `rate`, swap two distinct seats. Returns whether a
    /// swap happened.
    ///
    /// The probability draw is always consumed, even for arrangements too
    /// short to swap, so the random stream does not depend on length.
    pub fn mutate(&mut self, arrangement: &mut Arrangement, rate: f32) -> bool {
        if self.rng.r#gen::<f32>() >= rate || arrangement.len() < 2 {
            return false;
        }

        let picks = rand::seq::index::sample(&mut self.rng, arrangement.len(), 2);
        arrangement.swap(picks.index(0), picks.index(1));
        true
    }

    /// Uniform index in `0..len`.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Number of seats at which two arrangements differ.
pub fn arrangement_distance(a: &Arrangement, b: &Arrangement) -> usize {
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .filter(|(x, y)| x != y)
        .count()
        + a.len().abs_diff(b.len())
}
