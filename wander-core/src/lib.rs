//! # wander-core
//!
//! Foundation crate for the Wander hotel curation pipeline.
//! Defines the raw/derived data model, the rule tables (config), errors,
//! the pluggable classifier trait, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::WanderConfig;
pub use errors::{ConfigError, InputError, WanderError, WanderResult};
pub use models::{
    BrandInfo, CuratedCard, CurationStats, DiversityStats, GateId, HotelContent, HotelIdentity,
    HotelOffer, HotelSignals, MediaCategory, MediaItem, RawHotel, ScoreComponents, Tag,
    TagCategory,
};
pub use traits::{KeywordClass, SignalClassifier, TextSignals};
