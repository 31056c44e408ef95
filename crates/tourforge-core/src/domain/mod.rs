//! Domain model: tours, distance oracles and solution sinks.

mod instance;
mod sink;
mod tour;

pub use instance::{DistanceMatrix, DistanceOracle, EuclideanInstance, Point};
pub use sink::{SolutionSink, TourSolution};
pub use tour::Tour;
