//! First-improvement 2-opt sweep.

use tourforge_core::{DistanceOracle, Result, Tour};
use tracing::trace;

use crate::heuristic::r#move::SegmentReverseMove;

/// Counters reported by one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepOutcome {
    /// Candidate reversals whose gain was evaluated.
    pub evaluated: u64,
    /// Reversals actually applied.
    pub reversals: u64,
}

impl SweepOutcome {
    /// Returns true if at least one reversal was applied.
    pub fn improved(&self) -> bool {
        self.reversals > 0
    }
}

/// One full pass over every interior position range.
///
/// Ranges `(i, j)` with `1 <= i < j <= N - 1` are visited in increasing `i`,
/// then increasing `j`. Every range with a negative gain is reversed on the
/// spot and the sweep continues over the updated tour (first improvement,
/// not best improvement). A pass costs `O(N²)` distance lookups.
///
/// # Example
///
/// ```
/// use tourforge_core::{EuclideanInstance, Tour};
/// use tourforge_solver::phase::localsearch::TwoOptPass;
///
/// let square = EuclideanInstance::from_coordinates(
///     &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)],
/// ).unwrap();
///
/// let mut tour = Tour::from_order(vec![0, 2, 1, 3]).unwrap();
/// let outcome = TwoOptPass::new().run(&mut tour, &square).unwrap();
///
/// assert!(outcome.improved());
/// assert!((tour.length(&square).unwrap() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoOptPass;

impl TwoOptPass {
    pub fn new() -> Self {
        Self
    }

    /// Sweeps `tour` once, reversing improving segments in place.
    pub fn run<O: DistanceOracle + ?Sized>(
        &self,
        tour: &mut Tour,
        oracle: &O,
    ) -> Result<SweepOutcome> {
        let n = tour.city_count();
        let mut outcome = SweepOutcome::default();

        for start in 1..n {
            for end in start + 1..n {
                let m = SegmentReverseMove::new(start, end);
                let gain = m.gain(tour, oracle)?;
                outcome.evaluated += 1;
                if gain < 0.0 {
                    m.apply(tour)?;
                    outcome.reversals += 1;
                    trace!(event = "reversal", start = start, end = end, gain = gain);
                }
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourforge_core::{DistanceMatrix, EuclideanInstance};
    use tourforge_test::instances::{circle, random_euclidean, unit_square};

    #[test]
    fn test_optimal_square_has_no_reversal() {
        let square = unit_square();
        let mut tour = Tour::identity(4).unwrap();
        let outcome = TwoOptPass::new().run(&mut tour, &square).unwrap();

        assert_eq!(outcome.reversals, 0);
        assert_eq!(outcome.evaluated, 3);
        assert_eq!(tour, Tour::identity(4).unwrap());
    }

    #[test]
    fn test_sweep_never_lengthens_tour() {
        let instance = random_euclidean(60, 21);
        let mut tour = Tour::identity(60).unwrap();
        let pass = TwoOptPass::new();

        let mut previous = tour.length(&instance).unwrap();
        for _ in 0..5 {
            pass.run(&mut tour, &instance).unwrap();
            let current = tour.length(&instance).unwrap();
            assert!(current <= previous + 1e-9);
            assert!(tour.is_valid());
            assert_eq!(tour.city_at(0), 0);
            previous = current;
        }
    }

    #[test]
    fn test_repeated_sweeps_reach_local_optimum() {
        let instance = random_euclidean(30, 4);
        let mut tour = Tour::identity(30).unwrap();
        let pass = TwoOptPass::new();

        let mut sweeps = 0;
        while pass.run(&mut tour, &instance).unwrap().improved() {
            sweeps += 1;
            assert!(sweeps < 1000);
        }

        for start in 1..30 {
            for end in start + 1..30 {
                let gain = SegmentReverseMove::new(start, end)
                    .gain(&tour, &instance)
                    .unwrap();
                assert!(gain >= 0.0);
            }
        }
    }

    #[test]
    fn test_circle_untangles_to_perimeter() {
        let instance = circle(8);
        let mut tour = Tour::from_order(vec![0, 4, 1, 5, 2, 6, 3, 7]).unwrap();
        let pass = TwoOptPass::new();
        while pass.run(&mut tour, &instance).unwrap().improved() {}

        let perimeter = Tour::identity(8).unwrap().length(&instance).unwrap();
        assert!((tour.length(&instance).unwrap() - perimeter).abs() < 1e-9);
    }

    #[test]
    fn test_tiny_tours() {
        let pass = TwoOptPass::new();
        let points = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
        for n in 1..=2 {
            let instance = EuclideanInstance::from_coordinates(&points[..n]).unwrap();
            let mut tour = Tour::identity(n).unwrap();
            let outcome = pass.run(&mut tour, &instance).unwrap();
            assert_eq!(outcome, SweepOutcome::default());
        }

        // A triangle has one candidate, and reversing it never helps.
        let triangle = EuclideanInstance::from_coordinates(&points).unwrap();
        let mut tour = Tour::identity(3).unwrap();
        let outcome = pass.run(&mut tour, &triangle).unwrap();
        assert_eq!(outcome.evaluated, 1);
        assert_eq!(outcome.reversals, 0);
    }

    #[test]
    fn test_sweep_propagates_oracle_error() {
        let matrix = DistanceMatrix::new(4, vec![0.0; 16]).unwrap();
        let mut tour = Tour::identity(6).unwrap();
        assert!(TwoOptPass::new().run(&mut tour, &matrix).is_err());
    }
}
