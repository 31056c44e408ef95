//! Time-based termination.

use std::time::Duration;

use tourforge_config::DEFAULT_SAFETY_MARGIN_MILLIS;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates once the time limit, minus a safety margin, has elapsed.
///
/// The margin leaves room for the sweep that is running when the check
/// happens. A margin larger than the limit means the loop stops after its
/// first iteration.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tourforge_solver::termination::TimeTermination;
///
/// // 30 seconds, stop checking in at 29.5
/// let term = TimeTermination::seconds(30);
/// assert_eq!(term.effective_limit(), Duration::from_millis(29_500));
///
/// let term = TimeTermination::millis(200).with_safety_margin(Duration::ZERO);
/// assert_eq!(term.effective_limit(), Duration::from_millis(200));
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
    safety_margin: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            safety_margin: Duration::from_millis(DEFAULT_SAFETY_MARGIN_MILLIS),
        }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn seconds(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn with_safety_margin(mut self, safety_margin: Duration) -> Self {
        self.safety_margin = safety_margin;
        self
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn safety_margin(&self) -> Duration {
        self.safety_margin
    }

    /// Elapsed time at which the search stops.
    pub fn effective_limit(&self) -> Duration {
        self.limit.saturating_sub(self.safety_margin)
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        solver_scope
            .elapsed()
            .is_some_and(|e| e >= self.effective_limit())
    }
}
