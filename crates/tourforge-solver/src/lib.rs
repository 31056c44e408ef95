//! TourForge Solver Engine
//!
//! This crate provides the search for approximate TSP tours:
//! - Nearest-neighbor construction
//! - First-improvement 2-opt local search
//! - Random transposition perturbation with restarts
//! - Termination conditions
//! - Solution streaming over a channel
//!
//! # Example
//!
//! ```
//! use tourforge_config::SolverConfig;
//! use tourforge_core::{EuclideanInstance, TourSolution};
//! use tourforge_solver::{Solver, SweepCountTermination};
//!
//! let instance = EuclideanInstance::from_coordinates(&[
//!     (0.0, 0.0), (4.0, 0.0), (1.0, 0.0), (3.0, 0.0), (2.0, 0.0),
//! ]).unwrap();
//! let mut solution = TourSolution::new(5);
//!
//! let result = Solver::new(&SolverConfig::default().with_random_seed(1))
//!     .unwrap()
//!     .with_termination(SweepCountTermination::new(20))
//!     .solve(&instance, &mut solution)
//!     .unwrap();
//!
//! assert!((result.distance - 8.0).abs() < 1e-12);
//! ```

pub mod heuristic;
pub mod phase;
pub mod scope;
pub mod sink;
pub mod solver;
pub mod stats;
pub mod termination;

pub use heuristic::{PositionPair, SegmentReverseMove, TranspositionMove};
pub use phase::construction::NearestNeighborBuilder;
pub use phase::localsearch::{SweepOutcome, TwoOptPass};
pub use phase::perturbation::{
    Perturbation, PerturbationEngine, PerturbationKind, TriedTranspositions,
};
pub use scope::SolverScope;
pub use sink::{ChannelSink, TourUpdate};
pub use solver::{SolveResult, Solver, DEFAULT_TIME_LIMIT_SECS};
pub use stats::SolverStats;
pub use termination::{OrTermination, SweepCountTermination, Termination, TimeTermination};
