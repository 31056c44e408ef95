//! Time-budgeted tour search.
//!
//! Logging levels:
//! - **INFO**: solve start/end, construction result
//! - **DEBUG**: new best tours, restarts
//! - **TRACE**: applied reversals and perturbations

use std::time::Duration;

use tourforge_config::SolverConfig;
use tourforge_core::{DistanceOracle, Result, SolutionSink, Tour, TourForgeError};
use tracing::{debug, info};

use crate::phase::construction::NearestNeighborBuilder;
use crate::phase::localsearch::TwoOptPass;
use crate::phase::perturbation::PerturbationEngine;
use crate::scope::SolverScope;
use crate::stats::SolverStats;
use crate::termination::{Termination, TimeTermination};

/// Default time limit in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 30;

/// Result of a solve.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Best tour found.
    pub tour: Tour,
    /// Length of [`tour`](Self::tour).
    pub distance: f64,
    /// Counters collected during the run.
    pub stats: SolverStats,
}

/// The search loop.
///
/// Builds a nearest-neighbor tour, then alternates first-improvement 2-opt
/// sweeps with perturbations of the best tour until the termination fires.
/// Every strictly shorter tour is published to the sink as soon as it is
/// found, so the sink always holds a valid answer.
///
/// # Example
///
/// ```
/// use tourforge_config::SolverConfig;
/// use tourforge_core::{EuclideanInstance, TourSolution};
/// use tourforge_solver::termination::SweepCountTermination;
/// use tourforge_solver::Solver;
///
/// let square = EuclideanInstance::from_coordinates(
///     &[(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)],
/// ).unwrap();
/// let mut solution = TourSolution::new(4);
///
/// let solver = Solver::new(&SolverConfig::default())
///     .unwrap()
///     .with_termination(SweepCountTermination::new(10))
///     .with_seed(7);
/// let result = solver.solve(&square, &mut solution).unwrap();
///
/// assert!((result.distance - 4.0).abs() < 1e-12);
/// assert_eq!(solution.distance(), Some(result.distance));
/// ```
#[derive(Debug, Clone)]
pub struct Solver<T = TimeTermination> {
    termination: T,
    construction: NearestNeighborBuilder,
    local_search: TwoOptPass,
    perturbation: PerturbationEngine,
    random_seed: Option<u64>,
    clear_tried_on_improvement: bool,
}

impl Solver<TimeTermination> {
    /// Creates a solver from configuration.
    ///
    /// The time budget is read here, once. Without one the solver runs
    /// for [`DEFAULT_TIME_LIMIT_SECS`].
    pub fn new(config: &SolverConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| TourForgeError::Config(e.to_string()))?;

        let time_limit = config
            .time_limit()
            .unwrap_or(Duration::from_secs(DEFAULT_TIME_LIMIT_SECS));

        Ok(Self {
            termination: TimeTermination::new(time_limit)
                .with_safety_margin(config.safety_margin()),
            construction: NearestNeighborBuilder::new(),
            local_search: TwoOptPass::new(),
            perturbation: PerturbationEngine::from_config(&config.perturbation),
            random_seed: config.random_seed,
            clear_tried_on_improvement: config.perturbation.clear_tried_on_improvement,
        })
    }
}

impl<T: Termination> Solver<T> {
    /// Replaces the termination condition.
    pub fn with_termination<U: Termination>(self, termination: U) -> Solver<U> {
        Solver {
            termination,
            construction: self.construction,
            local_search: self.local_search,
            perturbation: self.perturbation,
            random_seed: self.random_seed,
            clear_tried_on_improvement: self.clear_tried_on_improvement,
        }
    }

    /// Seeds the random stream, making runs with a clock-free termination
    /// reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Replaces the perturbation engine built from configuration.
    pub fn with_perturbation(mut self, perturbation: PerturbationEngine) -> Self {
        self.perturbation = perturbation;
        self
    }

    /// Forget tried transpositions whenever the best tour improves.
    pub fn with_clear_tried_on_improvement(mut self, clear: bool) -> Self {
        self.clear_tried_on_improvement = clear;
        self
    }

    /// Returns the termination condition.
    pub fn termination(&self) -> &T {
        &self.termination
    }

    /// Returns the seed of the random stream, if fixed.
    pub fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }

    /// Solves the instance behind `oracle`, publishing improving tours to
    /// `sink`.
    ///
    /// # Errors
    ///
    /// `DegenerateInstance` for an instance without cities, or the first
    /// error reported by the oracle. Tours published before the error stay
    /// in the sink.
    pub fn solve<O, K>(&self, oracle: &O, sink: &mut K) -> Result<SolveResult>
    where
        O: DistanceOracle + ?Sized,
        K: SolutionSink + ?Sized,
    {
        let city_count = oracle.city_count();
        info!(
            event = "solve_start",
            city_count = city_count,
            seed = ?self.random_seed,
            termination = ?self.termination,
        );

        let initial = self.construction.build(oracle)?;
        let distance = initial.length(oracle)?;
        sink.publish(&initial, distance);
        info!(event = "construction_end", distance = distance);

        let mut scope = match self.random_seed {
            Some(seed) => SolverScope::with_seed(initial, distance, seed),
            None => SolverScope::new(initial, distance),
        };
        scope.start_solving();

        // Below three cities there is no pair of interior positions to
        // reverse or swap: the constructed tour is final.
        if city_count >= 3 {
            self.search(&mut scope, oracle, sink)?;
        }

        let (tour, distance, stats) = scope.into_best();
        info!(
            event = "solve_end",
            distance = distance,
            sweeps = stats.sweeps,
            improvements = stats.improvements,
            restarts = stats.restarts,
            duration_ms = stats.elapsed().as_millis() as u64,
        );

        Ok(SolveResult {
            tour,
            distance,
            stats,
        })
    }

    fn search<O, K>(&self, scope: &mut SolverScope, oracle: &O, sink: &mut K) -> Result<()>
    where
        O: DistanceOracle + ?Sized,
        K: SolutionSink + ?Sized,
    {
        let mut previous_distance = f64::MAX;

        loop {
            let outcome = self.local_search.run(scope.working_tour_mut(), oracle)?;
            scope.stats_mut().record_sweep(&outcome);
            let distance = scope.refresh_working_distance(oracle)?;

            self.accept_improvement(scope, sink);

            // The sweep left the tour no shorter: local optimum.
            if previous_distance <= distance {
                scope.perturb(&self.perturbation, oracle)?;
            }

            if self.termination.is_terminated(scope) {
                return Ok(());
            }
            previous_distance = scope.working_distance();
        }
    }

    /// Promotes a strictly shorter working tour to best and publishes it.
    fn accept_improvement<K>(&self, scope: &mut SolverScope, sink: &mut K) -> bool
    where
        K: SolutionSink + ?Sized,
    {
        if !scope.update_best_tour() {
            return false;
        }
        sink.publish(scope.best_tour(), scope.best_distance());
        debug!(
            event = "new_best",
            sweep = scope.stats().sweeps,
            distance = scope.best_distance(),
        );
        if self.clear_tried_on_improvement {
            scope.tried_mut().clear();
        }
        true
    }
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
