//! Construction heuristics producing the initial tour.

mod nearest_neighbor;

pub use nearest_neighbor::NearestNeighborBuilder;
