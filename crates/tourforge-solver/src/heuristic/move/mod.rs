//! Move system for modifying tours.
//!
//! Moves are small value types describing a change to a [`Tour`]:
//! - [`SegmentReverseMove`] - the 2-opt segment reversal, with gain evaluation
//! - [`TranspositionMove`] - exchange of two positions, used to perturb
//!
//! Both leave position `0` and the closing duplicate untouched.
//!
//! [`Tour`]: tourforge_core::Tour

mod transposition;
mod two_opt;

pub use transposition::{PositionPair, TranspositionMove};
pub use two_opt::SegmentReverseMove;
