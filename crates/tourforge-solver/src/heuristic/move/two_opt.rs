//! SegmentReverseMove - reverses a contiguous range of tour positions.
//!
//! This is the 2-opt move: reversing the cities between positions `start`
//! and `end` replaces the edges entering and leaving the segment with two
//! new ones, leaving every other edge unchanged.

use tourforge_core::{DistanceOracle, Result, Tour, TourForgeError};

/// A move that reverses the tour between two interior positions.
///
/// Valid ranges satisfy `1 <= start < end <= N - 1`: position `0` (and its
/// duplicate at `N`) holds the fixed start city and is never reversed.
///
/// # Example
///
/// ```
/// use tourforge_core::{EuclideanInstance, Tour};
/// use tourforge_solver::heuristic::r#move::SegmentReverseMove;
///
/// let square = EuclideanInstance::from_coordinates(
///     &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)],
/// ).unwrap();
///
/// // 0 -> 2 -> 1 -> 3 crosses itself; reversing positions 1..=2 fixes it.
/// let crossed = Tour::from_order(vec![0, 2, 1, 3]).unwrap();
/// let m = SegmentReverseMove::new(1, 2);
///
/// assert!(m.gain(&crossed, &square).unwrap() < 0.0);
/// assert_eq!(m.reversed(&crossed).unwrap().order(), &[0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentReverseMove {
    /// First reversed position (inclusive)
    start: usize,
    /// Last reversed position (inclusive)
    end: usize,
}

impl SegmentReverseMove {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of reversed positions.
    pub fn segment_len(&self) -> usize {
        self.end.saturating_sub(self.start) + 1
    }

    /// Returns true if the range is a valid interior range for `city_count`.
    pub fn is_doable(&self, city_count: usize) -> bool {
        self.start >= 1 && self.start < self.end && self.end < city_count
    }

    /// Signed change in tour length if this move were applied.
    ///
    /// Negative means the reversal shortens the tour. Computed from the four
    /// boundary edges only; the tour is not modified.
    pub fn gain<O: DistanceOracle + ?Sized>(&self, tour: &Tour, oracle: &O) -> Result<f64> {
        let n = tour.city_count();
        if !self.is_doable(n) {
            return Err(self.invalid(n));
        }
        let before = tour.city_at(self.start - 1);
        let first = tour.city_at(self.start);
        let last = tour.city_at(self.end);
        let after = tour.city_at((self.end + 1) % n);

        Ok(oracle.distance(first, after)? + oracle.distance(before, last)?
            - oracle.distance(before, first)?
            - oracle.distance(last, after)?)
    }

    /// Reverses the segment of `tour` in place.
    pub fn apply(&self, tour: &mut Tour) -> Result<()> {
        tour.reverse_segment(self.start, self.end)
    }

    /// Returns a copy of `tour` with the segment reversed.
    pub fn reversed(&self, tour: &Tour) -> Result<Tour> {
        let mut reversed = tour.clone();
        self.apply(&mut reversed)?;
        Ok(reversed)
    }

    fn invalid(&self, city_count: usize) -> TourForgeError {
        TourForgeError::InvalidMove {
            start: self.start,
            end: self.end,
            city_count,
        }
    }
}
