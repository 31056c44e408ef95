//! Shared test fixtures for TourForge crates.
//!
//! - [`instances`] - small geometric instances with known optima, plus
//!   seeded random ones
//! - [`sinks`] - a sink that records every publication
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! tourforge-test = { workspace = true }
//! ```

pub mod instances;
pub mod sinks;

pub use instances::{circle, line, random_euclidean, unit_square};
pub use sinks::RecordingSink;
