//! Sweep count termination.

use super::Termination;
use crate::scope::SolverScope;

/// Terminates after a number of 2-opt sweeps.
///
/// Independent of the clock, so runs with a fixed seed are reproducible.
///
/// # Example
///
/// ```
/// use tourforge_solver::termination::SweepCountTermination;
///
/// let term = SweepCountTermination::new(500);
/// assert_eq!(term.limit(), 500);
/// ```
#[derive(Debug, Clone)]
pub struct SweepCountTermination {
    limit: u64,
}

impl SweepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for SweepCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        solver_scope.stats().sweeps >= self.limit
    }
}
