use serde::{Deserialize, Serialize};

use super::defaults;

/// Hard gate thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Minimum media count for the photo gate.
    pub min_photos: usize,
    /// Minimum rating for the quality gate.
    pub min_rating: f64,
    /// Maximum normalized best price before the wow override is needed.
    pub max_price: f64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_photos: defaults::DEFAULT_MIN_PHOTOS,
            min_rating: defaults::DEFAULT_MIN_RATING,
            max_price: defaults::DEFAULT_MAX_PRICE,
        }
    }
}
