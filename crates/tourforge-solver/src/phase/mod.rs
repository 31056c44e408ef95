//! Solver phases.
//!
//! A solve runs these in a fixed cycle:
//! - [`construction`]: the initial nearest-neighbor tour
//! - [`localsearch`]: first-improvement 2-opt sweeps
//! - [`perturbation`]: random transpositions and restarts once sweeps stall

pub mod construction;
pub mod localsearch;
pub mod perturbation;
