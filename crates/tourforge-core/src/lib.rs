//! TourForge Core - Core types and traits for tour optimization
//!
//! This crate provides the fundamental abstractions for TourForge:
//! - `Tour`, the closed city sequence every solver step works on
//! - `DistanceOracle` and the bundled instance types
//! - `SolutionSink` for publishing improving tours
//! - The error taxonomy shared by all crates

pub mod domain;
pub mod error;

pub use domain::{
    DistanceMatrix, DistanceOracle, EuclideanInstance, Point, SolutionSink, Tour, TourSolution,
};
pub use error::{Result, TourForgeError};
