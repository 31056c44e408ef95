//! TourForge - A time-budgeted TSP solver in Rust
//!
//! Give it a [`DistanceOracle`] and a [`SolutionSink`]; it returns the
//! shortest tour it found once the budget runs out, publishing every
//! improvement on the way.
//!
//! # Example
//!
//! ```rust
//! use tourforge::prelude::*;
//!
//! let instance = EuclideanInstance::from_coordinates(
//!     &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)],
//! ).unwrap();
//! let mut solution = TourSolution::new(4);
//!
//! let config = SolverConfig::new().with_termination_seconds(0.6).with_random_seed(1);
//! let result = run_solver_with_config(&instance, &mut solution, &config).unwrap();
//!
//! assert!((result.distance - 4.0).abs() < 1e-12);
//! assert_eq!(solution.order(), Some(vec![0, 1, 2, 3]));
//! ```
//!
//! Solver settings are read from `solver.toml` by [`run_solver`]:
//!
//! ```toml
//! random_seed = 42
//!
//! [termination]
//! seconds_spent_limit = 10
//!
//! [perturbation]
//! max_draws = 1000
//! restart_swaps = 100000
//! ```

// Domain types
pub use tourforge_core::{
    DistanceMatrix, DistanceOracle, EuclideanInstance, Point, Result, SolutionSink, Tour,
    TourForgeError, TourSolution,
};

// Configuration
pub use tourforge_config::{ConfigError, PerturbationConfig, SolverConfig, TerminationConfig};

// Solver
pub use tourforge_solver::{
    ChannelSink, OrTermination, PerturbationEngine, SolveResult, Solver, SolverStats,
    SweepCountTermination, Termination, TimeTermination, TourUpdate,
};

#[cfg(feature = "console")]
pub use tourforge_console as console;

mod solver;
pub use solver::{load_config, run_solver, run_solver_with_channel, run_solver_with_config};

pub mod prelude {
    pub use super::{
        run_solver, run_solver_with_channel, run_solver_with_config, DistanceMatrix,
        DistanceOracle, EuclideanInstance, SolutionSink, SolveResult, SolverConfig, Tour,
        TourSolution,
    };
}
