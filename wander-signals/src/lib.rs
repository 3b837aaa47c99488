//! # wander-signals
//!
//! Derives normalized signals from a raw hotel and its descriptive content.
//! Pure functions only: missing fields degrade to empty or zero values and
//! nothing here returns an error.

pub mod amenities;
pub mod brand;
pub mod classifier;
pub mod engine;
pub mod photos;
pub mod rating;
pub mod tags;

pub use classifier::KeywordClassifier;
pub use engine::SignalExtractor;
