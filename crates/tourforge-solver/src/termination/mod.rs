//! Termination conditions for the search loop.
//!
//! Checked after every iteration, never during a sweep, so a run can
//! overshoot its budget by up to one sweep.

mod composite;
mod sweep_count;
mod time;

use std::fmt::Debug;

use crate::scope::SolverScope;

pub use composite::OrTermination;
pub use sweep_count::SweepCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop solving.
pub trait Termination: Debug {
    /// Returns true if solving should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool;
}

impl<T: Termination + ?Sized> Termination for &T {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        (**self).is_terminated(solver_scope)
    }
}
