//! Sink fixtures.

use tourforge_core::SolutionSink;

/// Records every publication as `(order, distance)`.
///
/// Positions set before a commit are buffered; each
/// [`best_tour_changed`](SolutionSink::best_tour_changed) call appends the
/// buffered order to the history.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pending: Vec<usize>,
    history: Vec<(Vec<usize>, f64)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[(Vec<usize>, f64)] {
        &self.history
    }

    /// Published distances, in publication order.
    pub fn distances(&self) -> Vec<f64> {
        self.history.iter().map(|(_, d)| *d).collect()
    }

    pub fn last(&self) -> Option<&(Vec<usize>, f64)> {
        self.history.last()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl SolutionSink for RecordingSink {
    fn set_city_position(&mut self, city: usize, position: usize) {
        if position >= self.pending.len() {
            self.pending.resize(position + 1, usize::MAX);
        }
        self.pending[position] = city;
    }

    fn best_tour_changed(&mut self, distance: f64) {
        self.history.push((std::mem::take(&mut self.pending), distance));
    }
}
