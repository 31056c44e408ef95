//! TranspositionMove - exchanges the cities at two tour positions.

use std::fmt;

use tourforge_core::{Result, Tour};

/// An unordered pair of tour positions.
///
/// `PositionPair::new(3, 1)` and `PositionPair::new(1, 3)` are equal, so a
/// set of pairs never holds the same transposition twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositionPair {
    low: usize,
    high: usize,
}

impl PositionPair {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(&self) -> usize {
        self.low
    }

    pub fn high(&self) -> usize {
        self.high
    }

    /// Returns true if both positions are the same.
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }
}

impl fmt::Display for PositionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.low, self.high)
    }
}

/// A move that swaps the cities at two interior positions.
///
/// # Example
///
/// ```
/// use tourforge_core::Tour;
/// use tourforge_solver::heuristic::r#move::TranspositionMove;
///
/// let mut tour = Tour::identity(5).unwrap();
/// TranspositionMove::new(1, 3).apply(&mut tour).unwrap();
/// assert_eq!(tour.cities(), &[0, 3, 2, 1, 4, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TranspositionMove {
    left: usize,
    right: usize,
}

impl TranspositionMove {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn right(&self) -> usize {
        self.right
    }

    /// The unordered pair identifying this transposition.
    pub fn pair(&self) -> PositionPair {
        PositionPair::new(self.left, self.right)
    }

    pub fn apply(&self, tour: &mut Tour) -> Result<()> {
        tour.swap_positions(self.left, self.right)
    }
}

impl From<PositionPair> for TranspositionMove {
    fn from(pair: PositionPair) -> Self {
        Self::new(pair.low, pair.high)
    }
}
