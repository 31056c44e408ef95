//! Nearest-neighbor tour construction.

use rand::Rng;
use tourforge_core::{DistanceOracle, Result, Tour, TourForgeError};

use crate::heuristic::r#move::TranspositionMove;

/// Builds a tour by always travelling to the nearest unvisited city.
///
/// Starts at city `0`. Candidates are compared with a strict `<`, so ties
/// go to the lowest city index and the result is fully deterministic.
///
/// # Example
///
/// ```
/// use tourforge_core::EuclideanInstance;
/// use tourforge_solver::phase::construction::NearestNeighborBuilder;
///
/// let line = EuclideanInstance::from_coordinates(
///     &[(0.0, 0.0), (3.0, 0.0), (1.0, 0.0), (2.0, 0.0)],
/// ).unwrap();
///
/// let tour = NearestNeighborBuilder::new().build(&line).unwrap();
/// assert_eq!(tour.cities(), &[0, 2, 3, 1, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborBuilder;

impl NearestNeighborBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Builds the greedy tour.
    ///
    /// # Errors
    ///
    /// `DegenerateInstance` for an instance without cities, or any error
    /// reported by the oracle.
    pub fn build<O: DistanceOracle + ?Sized>(&self, oracle: &O) -> Result<Tour> {
        let n = oracle.city_count();
        if n == 0 {
            return Err(TourForgeError::DegenerateInstance { city_count: n });
        }

        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut current = 0;
        visited[current] = true;
        order.push(current);

        for _ in 1..n {
            let mut nearest = None;
            let mut nearest_distance = f64::INFINITY;
            for candidate in 0..n {
                if visited[candidate] {
                    continue;
                }
                let d = oracle.distance(current, candidate)?;
                if nearest.is_none() || d < nearest_distance {
                    nearest = Some(candidate);
                    nearest_distance = d;
                }
            }
            // n - 1 iterations over n cities: an unvisited city always exists
            let Some(next) = nearest else { break };
            visited[next] = true;
            order.push(next);
            current = next;
        }

        Tour::from_order(order)
    }

    /// Builds the greedy tour, then scrambles it with `swaps` random
    /// transpositions of interior positions.
    ///
    /// Swaps are unconditional and may repeat. With fewer than two interior
    /// positions there is nothing to scramble.
    pub fn build_scrambled<O, R>(&self, oracle: &O, rng: &mut R, swaps: usize) -> Result<Tour>
    where
        O: DistanceOracle + ?Sized,
        R: Rng,
    {
        let mut tour = self.build(oracle)?;
        let n = tour.city_count();
        if n < 3 {
            return Ok(tour);
        }
        for _ in 0..swaps {
            let left = rng.random_range(1..n);
            let right = rng.random_range(1..n);
            TranspositionMove::new(left, right).apply(&mut tour)?;
        }
        Ok(tour)
    }
}
