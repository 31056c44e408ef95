//! Solver-level scope.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use tourforge_core::{DistanceOracle, Result, Tour};

use crate::phase::perturbation::{
    Perturbation, PerturbationEngine, PerturbationKind, TriedTranspositions,
};
use crate::stats::SolverStats;

/// State of one solve run.
///
/// Owns the working tour being optimized, the best tour seen so far, the
/// transpositions tried since the last restart and the single random
/// stream every randomized step draws from.
#[derive(Debug)]
pub struct SolverScope {
    working_tour: Tour,
    working_distance: f64,
    best_tour: Tour,
    best_distance: f64,
    tried: TriedTranspositions,
    rng: StdRng,
    stats: SolverStats,
}

impl SolverScope {
    /// Creates a scope around an initial tour, with an OS-seeded rng.
    pub fn new(initial: Tour, distance: f64) -> Self {
        Self::with_rng(initial, distance, StdRng::from_os_rng())
    }

    /// Creates a scope with a reproducible random stream.
    pub fn with_seed(initial: Tour, distance: f64, seed: u64) -> Self {
        Self::with_rng(initial, distance, StdRng::seed_from_u64(seed))
    }

    fn with_rng(initial: Tour, distance: f64, rng: StdRng) -> Self {
        Self {
            working_tour: initial.clone(),
            working_distance: distance,
            best_tour: initial,
            best_distance: distance,
            tried: TriedTranspositions::new(),
            rng,
            stats: SolverStats::default(),
        }
    }

    pub fn start_solving(&mut self) {
        self.stats.start();
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.stats.started_at().map(|t| t.elapsed())
    }

    pub fn working_tour(&self) -> &Tour {
        &self.working_tour
    }

    pub fn working_tour_mut(&mut self) -> &mut Tour {
        &mut self.working_tour
    }

    pub fn working_distance(&self) -> f64 {
        self.working_distance
    }

    /// Recomputes the working distance after the working tour was mutated.
    pub fn refresh_working_distance<O: DistanceOracle + ?Sized>(
        &mut self,
        oracle: &O,
    ) -> Result<f64> {
        self.working_distance = self.working_tour.length(oracle)?;
        Ok(self.working_distance)
    }

    pub fn best_tour(&self) -> &Tour {
        &self.best_tour
    }

    pub fn best_distance(&self) -> f64 {
        self.best_distance
    }

    /// Copies the working tour into the best tour if it is strictly shorter.
    ///
    /// Returns true if the best tour changed.
    pub fn update_best_tour(&mut self) -> bool {
        if self.working_distance < self.best_distance {
            self.best_tour.clone_from(&self.working_tour);
            self.best_distance = self.working_distance;
            self.stats.record_improvement();
            true
        } else {
            false
        }
    }

    /// Replaces the working tour with a perturbation of the best tour.
    pub fn perturb<O: DistanceOracle + ?Sized>(
        &mut self,
        engine: &PerturbationEngine,
        oracle: &O,
    ) -> Result<PerturbationKind> {
        let Perturbation { tour, kind } =
            engine.perturb(&self.best_tour, &mut self.tried, oracle, &mut self.rng)?;
        self.working_distance = tour.length(oracle)?;
        self.working_tour = tour;
        self.stats.record_perturbation(kind == PerturbationKind::Restart);
        Ok(kind)
    }

    pub fn tried(&self) -> &TriedTranspositions {
        &self.tried
    }

    pub fn tried_mut(&mut self) -> &mut TriedTranspositions {
        &mut self.tried
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SolverStats {
        &mut self.stats
    }

    /// Consumes the scope, returning the best tour, its distance and the
    /// final statistics.
    pub fn into_best(mut self) -> (Tour, f64, SolverStats) {
        self.stats.finish();
        (self.best_tour, self.best_distance, self.stats)
    }
}
