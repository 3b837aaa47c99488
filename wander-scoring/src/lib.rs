//! # wander-scoring
//!
//! Six independent sub-scores (visual, amenity, brand, location, rating,
//! price penalty) combined by configured weights into a total floored at zero.

pub mod engine;
pub mod factors;
pub mod formula;

pub use engine::ScoringEngine;
pub use factors::ScoringContext;
