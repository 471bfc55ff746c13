//! Seating arrangement genome.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordering of individuals `1..=N`, one per seat.
///
/// Every identifier appears exactly once. Untrusted input goes through
/// [`Arrangement::new`]; the evolutionary operators only ever shuffle or swap
/// positions, which keeps the permutation intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Arrangement {
    seats: Vec<usize>,
}

impl Arrangement {
    /// Validate that `seats` is a permutation of `1..=seats.len()`.
    pub fn new(seats: Vec<usize>) -> Result<Self, ArrangementError> {
        let n = seats.len();
        let mut seen = vec![false; n];
        for (position, &id) in seats.iter().enumerate() {
            if id == 0 || id > n {
                return Err(ArrangementError::OutOfRange { id, position, n });
            }
            if std::mem::replace(&mut seen[id - 1], true) {
                return Err(ArrangementError::Duplicate { id, position });
            }
        }
        Ok(Self { seats })
    }

    /// The arrangement `[1, 2, ..., n]`.
    pub fn identity(n: usize) -> Self {
        Self {
            seats: (1..=n).collect(),
        }
    }

    /// Wrap seats already known to be a permutation.
    pub(crate) fn from_permutation(seats: Vec<usize>) -> Self {
        debug_assert!(Self::new(seats.clone()).is_ok(), "not a permutation");
        Self { seats }
    }

    /// Number of seats.
    #[inline]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Identifiers in seat order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.seats
    }

    /// Swap the occupants of two seats.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.seats.swap(a, b);
    }

    /// Mutable view for in-crate operators that only permute positions.
    pub(crate) fn seats_mut(&mut self) -> &mut [usize] {
        &mut self.seats
    }
}

impl TryFrom<Vec<usize>> for Arrangement {
    type Error = ArrangementError;

    fn try_from(seats: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(seats)
    }
}

impl From<Arrangement> for Vec<usize> {
    fn from(arrangement: Arrangement) -> Self {
        arrangement.seats
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, id) in self.seats.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", id)?;
        }
        write!(f, "]")
    }
}

/// Rejected arrangement input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArrangementError {
    #[error("Identifier {id} at position {position} is outside 1..={n}")]
    OutOfRange { id: usize, position: usize, n: usize },
    #[error("Identifier {id} appears again at position {position}")]
    Duplicate { id: usize, position: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_permutation() {
        let arrangement = Arrangement::new(vec![3, 1, 2]).unwrap();
        assert_eq!(arrangement.as_slice(), &[3, 1, 2]);
        assert_eq!(arrangement.len(), 3);
    }

    #[test]
    fn test_rejects_duplicate() {
        assert_eq!(
            Arrangement::new(vec![1, 2, 2]),
            Err(ArrangementError::Duplicate { id: 2, position: 2 })
        );
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            Arrangement::new(vec![0, 1]),
            Err(ArrangementError::OutOfRange {
                id: 0,
                position: 0,
                n: 2
            })
        );
        assert!(Arrangement::new(vec![1, 4, 2]).is_err());
    }

    #[test]
    fn test_swap_and_display() {
        let mut arrangement = Arrangement::identity(4);
        arrangement.swap(0, 3);
        assert_eq!(arrangement.to_string(), "[4, 2, 3, 1]");
    }

    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&Arrangement::identity(3)).unwrap();
        assert_eq!(json, "[1,2,3]");

        let parsed: Arrangement = serde_json::from_str("[2,3,1]").unwrap();
        assert_eq!(parsed.as_slice(), &[2, 3, 1]);

        assert!(serde_json::from_str::<Arrangement>("[1,1,2]").is_err());
    }
}
