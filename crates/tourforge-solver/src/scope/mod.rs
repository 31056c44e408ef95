//! Run state of a solve.
//!
//! [`SolverScope`] is created once per [`Solver::solve`](crate::Solver::solve)
//! call and threaded through every step; nothing about a run lives in
//! globals.

mod solver;

pub use solver::SolverScope;
