//! Streaming improving tours over a channel.

use tokio::sync::mpsc;
use tourforge_core::{SolutionSink, Tour};

/// A published best tour: the visiting order and its length.
pub type TourUpdate = (Vec<usize>, f64);

/// Sink that sends every published tour through an unbounded channel.
///
/// Lets another task follow the search live. Publications are dropped
/// silently once the receiver is gone; the solve itself carries on.
///
/// # Example
///
/// ```
/// use tokio::sync::mpsc;
/// use tourforge_core::{SolutionSink, Tour};
/// use tourforge_solver::ChannelSink;
///
/// let (sender, mut receiver) = mpsc::unbounded_channel();
/// let mut sink = ChannelSink::new(sender);
/// sink.publish(&Tour::from_order(vec![0, 2, 1]).unwrap(), 7.5);
///
/// assert_eq!(receiver.try_recv().unwrap(), (vec![0, 2, 1], 7.5));
/// ```
#[derive(Debug)]
pub struct ChannelSink {
    order: Vec<usize>,
    sender: mpsc::UnboundedSender<TourUpdate>,
}

impl ChannelSink {
    pub fn new(sender: mpsc::UnboundedSender<TourUpdate>) -> Self {
        Self {
            order: Vec::new(),
            sender,
        }
    }

    /// Returns true once the receiving side has been dropped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl SolutionSink for ChannelSink {
    fn set_city_position(&mut self, city: usize, position: usize) {
        if position >= self.order.len() {
            self.order.resize(position + 1, 0);
        }
        self.order[position] = city;
    }

    fn best_tour_changed(&mut self, distance: f64) {
        let _ = self.sender.send((self.order.clone(), distance));
    }

    fn publish(&mut self, tour: &Tour, distance: f64) {
        self.order.clear();
        self.order.extend_from_slice(tour.order());
        self.best_tour_changed(distance);
    }
}
