//! Refilling a population from selection survivors.

use super::{GenomeRng, Population, Selection};

/// Append `eliminated_count` children to the survivors.
///
/// Each child comes from a parent picked uniformly (with replacement) among
/// the original survivors; see [`GenomeRng::breed`].
pub fn reproduce(selection: Selection, rng: &mut GenomeRng) -> Population {
    let Selection {
        survivors,
        eliminated_count,
        ..
    } = selection;

    if eliminated_count == 0 {
        return survivors;
    }
    assert!(
        !survivors.is_empty(),
        "cannot breed {eliminated_count} children from an empty survivor set"
    );

    let parents = survivors.len();
    let mut next = survivors;
    for _ in 0..eliminated_count {
        let parent = rng.index(parents);
        // Offspring are appended after index `parents`, so only survivors breed.
        let child = rng.breed(&next.as_slice()[parent]);
        next.push(child);
    }
    next
}
