//! Perturbation: escaping 2-opt local optima.
//!
//! Once a sweep stops improving, the [`PerturbationEngine`] derives a new
//! working tour from the best tour by one random transposition, remembering
//! every pair it used in [`TriedTranspositions`]. When no fresh pair can be
//! found the engine restarts from a scrambled construction.

mod engine;
mod tried;

pub use engine::{Perturbation, PerturbationEngine, PerturbationKind};
pub use tried::TriedTranspositions;
