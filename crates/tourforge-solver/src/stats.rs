//! Solver statistics.
//!
//! Plain counters updated by the search loop, returned with the result.

use std::time::{Duration, Instant};

use crate::phase::localsearch::SweepOutcome;

/// Run-level statistics.
///
/// # Example
///
/// ```
/// use tourforge_solver::phase::localsearch::SweepOutcome;
/// use tourforge_solver::stats::SolverStats;
///
/// let mut stats = SolverStats::default();
/// stats.start();
/// stats.record_sweep(&SweepOutcome { evaluated: 10, reversals: 2 });
/// stats.record_perturbation(false);
/// stats.record_perturbation(true);
///
/// assert_eq!(stats.sweeps, 1);
/// assert_eq!(stats.moves_evaluated, 10);
/// assert_eq!(stats.reversals, 2);
/// assert_eq!(stats.perturbations, 1);
/// assert_eq!(stats.restarts, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    start_time: Option<Instant>,
    end_time: Option<Instant>,
    /// Completed 2-opt sweeps.
    pub sweeps: u64,
    /// Segment reversals whose gain was evaluated.
    pub moves_evaluated: u64,
    /// Segment reversals applied.
    pub reversals: u64,
    /// Transposition perturbations applied.
    pub perturbations: u64,
    /// Restarts from a scrambled construction.
    pub restarts: u64,
    /// Strict improvements of the best tour, construction excluded.
    pub improvements: u64,
}

impl SolverStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.end_time = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Instant passed by [`start`](Self::start), if started.
    pub fn started_at(&self) -> Option<Instant> {
        self.start_time
    }

    /// Time since [`start`](Self::start), up to [`finish`](Self::finish) if called.
    pub fn elapsed(&self) -> Duration {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    pub fn record_sweep(&mut self, outcome: &SweepOutcome) {
        self.sweeps += 1;
        self.moves_evaluated += outcome.evaluated;
        self.reversals += outcome.reversals;
    }

    pub fn record_perturbation(&mut self, restarted: bool) {
        if restarted {
            self.restarts += 1;
        } else {
            self.perturbations += 1;
        }
    }

    pub fn record_improvement(&mut self) {
        self.improvements += 1;
    }

    /// Returns the evaluated moves per second rate.
    pub fn moves_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.moves_evaluated as f64 / secs
        } else {
            0.0
        }
    }
}
