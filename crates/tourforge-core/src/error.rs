//! Error types for TourForge

use thiserror::Error;

/// Main error type for TourForge operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourForgeError {
    /// Distance lookup with a city index outside `[0, city_count)`
    #[error("City index {index} out of range for {city_count} cities")]
    InvalidIndex { index: usize, city_count: usize },

    /// Instance without any city
    #[error("Degenerate instance with {city_count} cities")]
    DegenerateInstance { city_count: usize },

    /// Malformed instance data
    #[error("Invalid instance: {0}")]
    InvalidInstance(String),

    /// Move range outside the interior positions of a tour
    #[error("Invalid move range {start}..={end} for {city_count} cities")]
    InvalidMove {
        start: usize,
        end: usize,
        city_count: usize,
    },

    /// City sequence that is not a permutation
    #[error("Invalid tour: {0}")]
    InvalidTour(String),

    /// Error in solver configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for TourForge operations
pub type Result<T> = std::result::Result<T, TourForgeError>;
