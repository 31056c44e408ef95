//! Memory of transpositions already attempted since the last restart.

use std::collections::HashSet;

use crate::heuristic::r#move::PositionPair;

/// Set of unordered position pairs already used to perturb the best tour.
///
/// # Example
///
/// ```
/// use tourforge_solver::heuristic::PositionPair;
/// use tourforge_solver::phase::perturbation::TriedTranspositions;
///
/// let mut tried = TriedTranspositions::new();
/// assert!(tried.insert(PositionPair::new(2, 5)));
/// assert!(tried.contains(PositionPair::new(5, 2)));
/// assert!(!tried.insert(PositionPair::new(5, 2)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TriedTranspositions {
    pairs: HashSet<PositionPair>,
}

impl TriedTranspositions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pair. Returns false if it was already present.
    pub fn insert(&mut self, pair: PositionPair) -> bool {
        self.pairs.insert(pair)
    }

    pub fn contains(&self, pair: PositionPair) -> bool {
        self.pairs.contains(&pair)
    }

    /// Forgets every pair.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
