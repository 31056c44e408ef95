//! Local search phase: repeated 2-opt sweeps.

mod two_opt;

pub use two_opt::{SweepOutcome, TwoOptPass};
