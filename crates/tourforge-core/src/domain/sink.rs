//! Receivers of improving tours.

use super::Tour;
use crate::error::Result;

/// Receives every strictly improving tour found by the solver.
///
/// A publication is a call to [`set_city_position`](Self::set_city_position)
/// for each city, positions `0..N`, followed by
/// [`best_tour_changed`](Self::best_tour_changed).
pub trait SolutionSink {
    /// Records that `city` is visited at `position`.
    fn set_city_position(&mut self, city: usize, position: usize);

    /// Called once all positions of a new best tour have been set.
    fn best_tour_changed(&mut self, _distance: f64) {}

    /// Publishes a whole tour.
    fn publish(&mut self, tour: &Tour, distance: f64) {
        for (position, &city) in tour.order().iter().enumerate() {
            self.set_city_position(city, position);
        }
        self.best_tour_changed(distance);
    }
}

impl<K: SolutionSink + ?Sized> SolutionSink for &mut K {
    fn set_city_position(&mut self, city: usize, position: usize) {
        (**self).set_city_position(city, position);
    }

    fn best_tour_changed(&mut self, distance: f64) {
        (**self).best_tour_changed(distance);
    }
}

/// In-memory solution container holding the position of every city.
///
/// # Example
///
/// ```
/// use tourforge_core::{SolutionSink, Tour, TourSolution};
///
/// let mut solution = TourSolution::new(3);
/// solution.publish(&Tour::from_order(vec![0, 2, 1]).unwrap(), 3.0);
///
/// assert_eq!(solution.order(), Some(vec![0, 2, 1]));
/// assert_eq!(solution.distance(), Some(3.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TourSolution {
    positions: Vec<Option<usize>>,
    distance: Option<f64>,
    publications: u64,
}

impl TourSolution {
    pub fn new(city_count: usize) -> Self {
        Self {
            positions: vec![None; city_count],
            distance: None,
            publications: 0,
        }
    }

    /// Position of `city`, if one has been recorded.
    pub fn position_of(&self, city: usize) -> Option<usize> {
        self.positions.get(city).copied().flatten()
    }

    /// Distance of the last published tour.
    pub fn distance(&self) -> Option<f64> {
        self.distance
    }

    /// Number of completed publications.
    pub fn publications(&self) -> u64 {
        self.publications
    }

    /// Rebuilds the visiting order, or `None` while positions are missing
    /// or collide.
    pub fn order(&self) -> Option<Vec<usize>> {
        let mut order = vec![None; self.positions.len()];
        for (city, position) in self.positions.iter().enumerate() {
            let slot = order.get_mut((*position)?)?;
            if slot.is_some() {
                return None;
            }
            *slot = Some(city);
        }
        order.into_iter().collect()
    }

    /// The recorded tour.
    pub fn tour(&self) -> Option<Result<Tour>> {
        self.order().map(Tour::from_order)
    }
}

impl SolutionSink for TourSolution {
    fn set_city_position(&mut self, city: usize, position: usize) {
        if city >= self.positions.len() {
            self.positions.resize(city + 1, None);
        }
        self.positions[city] = Some(position);
    }

    fn best_tour_changed(&mut self, distance: f64) {
        self.distance = Some(distance);
        self.publications += 1;
    }
}
