//! Fixed-size collections of arrangements.

use crate::schema::Arrangement;

use super::GenomeRng;

/// Ordered set of candidate arrangements for one generation.
///
/// Order is insertion order: survivors first, offspring appended.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Population {
    members: Vec<Arrangement>,
}

impl Population {
    /// `population_size` independently shuffled permutations of
    /// `1..=graph_size`. Duplicates are allowed.
    pub fn initialize(graph_size: usize, population_size: usize, rng: &mut GenomeRng) -> Self {
        let members = (0..population_size)
            .map(|_| rng.random_arrangement(graph_size))
            .collect();
        Self { members }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arrangement> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Arrangement> {
        self.members.iter_mut()
    }

    pub fn as_slice(&self) -> &[Arrangement] {
        &self.members
    }

    pub fn get(&self, index: usize) -> Option<&Arrangement> {
        self.members.get(index)
    }

    pub fn push(&mut self, arrangement: Arrangement) {
        self.members.push(arrangement);
    }

    /// Replace the member at `index`.
    pub fn replace(&mut self, index: usize, arrangement: Arrangement) {
        self.members[index] = arrangement;
    }

    pub fn contains(&self, arrangement: &Arrangement) -> bool {
        self.members.contains(arrangement)
    }

    pub fn into_vec(self) -> Vec<Arrangement> {
        self.members
    }
}

impl From<Vec<Arrangement>> for Population {
    fn from(members: Vec<Arrangement>) -> Self {
        Self { members }
    }
}

impl FromIterator<Arrangement> for Population {
    fn from_iter<I: IntoIterator<Item = Arrangement>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Population {
    type Item = Arrangement;
    type IntoIter = std::vec::IntoIter<Arrangement>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Arrangement;
    type IntoIter = std::slice::Iter<'a, Arrangement>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
