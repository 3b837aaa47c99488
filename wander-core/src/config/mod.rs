//! Rule tables for Wander.
//! TOML-based, 3-layer resolution: env > file > compiled defaults.
//!
//! Loaded once at process start and passed into the pipeline; nothing here is global.

pub mod amenity_config;
pub mod brand_config;
pub mod currency_config;
pub mod defaults;
pub mod diversity_config;
pub mod gate_config;
pub mod keyword_config;
pub mod location_config;
pub mod scoring_config;
pub mod tag_rule_config;
pub mod wander_config;

pub use amenity_config::AmenityConfig;
pub use brand_config::BrandConfig;
pub use currency_config::CurrencyConfig;
pub use diversity_config::{DiversityConfig, DiversityPolicy};
pub use gate_config::GateConfig;
pub use keyword_config::KeywordConfig;
pub use location_config::LocationConfig;
pub use scoring_config::{PriceTier, RatingStep, ScoringConfig, ScoringWeights};
pub use tag_rule_config::{default_tag_rules, TagRule, TagVariant};
pub use wander_config::WanderConfig;
