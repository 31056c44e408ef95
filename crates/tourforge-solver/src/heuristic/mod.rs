//! Heuristic components: the moves applied to tours.

pub mod r#move;

pub use r#move::{PositionPair, SegmentReverseMove, TranspositionMove};
