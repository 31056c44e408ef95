//! Closed tour representation.

use std::fmt;

use super::DistanceOracle;
use crate::error::{Result, TourForgeError};

/// A closed tour over `N` cities.
///
/// Stored as `N + 1` city indices where the last entry repeats the first,
/// so the successor of position `k` is always position `k + 1`.
///
/// # Example
///
/// ```
/// use tourforge_core::Tour;
///
/// let tour = Tour::from_order(vec![0, 2, 1, 3]).unwrap();
/// assert_eq!(tour.cities(), &[0, 2, 1, 3, 0]);
/// assert_eq!(tour.city_count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// Builds a tour from a visiting order, appending the closing city.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTour` if `order` is empty or not a permutation of
    /// `0..order.len()`.
    pub fn from_order(mut order: Vec<usize>) -> Result<Self> {
        if order.is_empty() {
            return Err(TourForgeError::InvalidTour("empty city order".to_string()));
        }
        let n = order.len();
        let mut seen = vec![false; n];
        for &city in &order {
            if city >= n {
                return Err(TourForgeError::InvalidTour(format!(
                    "city {city} out of range for {n} cities"
                )));
            }
            if seen[city] {
                return Err(TourForgeError::InvalidTour(format!(
                    "city {city} visited twice"
                )));
            }
            seen[city] = true;
        }
        order.push(order[0]);
        Ok(Self { cities: order })
    }

    /// The identity tour `0, 1, ..., n-1, 0`.
    pub fn identity(city_count: usize) -> Result<Self> {
        Self::from_order((0..city_count).collect())
    }

    /// Number of distinct cities `N`.
    pub fn city_count(&self) -> usize {
        self.cities.len() - 1
    }

    /// All `N + 1` positions, including the closing duplicate.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// The visiting order without the closing duplicate.
    pub fn order(&self) -> &[usize] {
        &self.cities[..self.city_count()]
    }

    /// City at `position` (`0..=N`).
    ///
    /// # Panics
    ///
    /// Panics if `position > N`.
    #[inline]
    pub fn city_at(&self, position: usize) -> usize {
        self.cities[position]
    }

    /// Total length of the closed tour.
    pub fn length<O: DistanceOracle + ?Sized>(&self, oracle: &O) -> Result<f64> {
        self.cities
            .windows(2)
            .try_fold(0.0, |acc, edge| Ok(acc + oracle.distance(edge[0], edge[1])?))
    }

    /// Returns true if positions `0..N` form a permutation and position `N`
    /// repeats position `0`.
    pub fn is_valid(&self) -> bool {
        let n = self.city_count();
        if self.cities[n] != self.cities[0] {
            return false;
        }
        let mut seen = vec![false; n];
        self.order().iter().all(|&city| {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
            true
        })
    }

    /// Exchanges the cities at two interior positions.
    ///
    /// Positions `0` and `N` hold the fixed start city and are never touched.
    pub fn swap_positions(&mut self, left: usize, right: usize) -> Result<()> {
        self.check_interior(left, right)?;
        self.cities.swap(left, right);
        Ok(())
    }

    /// Reverses the cities between interior positions `start` and `end`
    /// inclusive.
    pub fn reverse_segment(&mut self, start: usize, end: usize) -> Result<()> {
        if start >= end {
            return Err(self.invalid_move(start, end));
        }
        self.check_interior(start, end)?;
        self.cities[start..=end].reverse();
        Ok(())
    }

    fn check_interior(&self, left: usize, right: usize) -> Result<()> {
        let last_interior = self.city_count().saturating_sub(1);
        let inside = |p: usize| (1..=last_interior).contains(&p);
        if inside(left) && inside(right) {
            Ok(())
        } else {
            Err(self.invalid_move(left, right))
        }
    }

    fn invalid_move(&self, start: usize, end: usize) -> TourForgeError {
        TourForgeError::InvalidMove {
            start,
            end,
            city_count: self.city_count(),
        }
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for city in &self.cities {
            if !first {
                f.write_str(" -> ")?;
            }
            write!(f, "{city}")?;
            first = false;
        }
        Ok(())
    }
}
