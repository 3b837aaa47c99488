//! # wander-diversity
//!
//! Reorders curated cards so a swipeable feed does not show the same city or
//! brand more than twice in a row. Every policy is a pure permutation: cards
//! are never dropped or duplicated.

pub mod bucket;
pub mod engine;
pub mod runs;
mod search;
pub mod stats;
pub mod tiered;

pub use engine::DiversityEngine;
pub use stats::compute_stats;
