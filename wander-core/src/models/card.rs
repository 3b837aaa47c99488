use serde::{Deserialize, Serialize};

use super::hotel::Price;
use super::score::ScoreComponents;
use super::signals::Tag;

/// The pipeline's output unit: a hotel that passed every gate and the score threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedCard {
    pub hotel_id: String,
    pub name: String,
    pub city: String,
    pub country: Option<String>,
    pub city_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub best_price: Option<Price>,
    pub photos: Vec<String>,
    pub hero_photo: Option<String>,
    pub description: Option<String>,
    /// At most three, in tag-rule order.
    pub tags: Vec<Tag>,
    pub score: ScoreComponents,
    pub rating: Option<f64>,
    pub chain_code: Option<String>,
}

impl CuratedCard {
    /// Key used for city repetition checks.
    pub fn city_key(&self) -> String {
        self.city.trim().to_lowercase()
    }

    /// Key used for brand repetition checks. Brandless cards have none.
    pub fn brand_key(&self) -> Option<String> {
        self.chain_code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_uppercase)
    }
}
