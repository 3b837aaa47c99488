use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights for the six score components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub visual: f64,
    pub amenity: f64,
    pub brand: f64,
    pub location: f64,
    pub rating: f64,
    pub price: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.visual + self.amenity + self.brand + self.location + self.rating + self.price
    }

    /// `(name, value)` pairs, used by validation.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("visual", self.visual),
            ("amenity", self.amenity),
            ("brand", self.brand),
            ("location", self.location),
            ("rating", self.rating),
            ("price", self.price),
        ]
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            visual: defaults::DEFAULT_WEIGHT_VISUAL,
            amenity: defaults::DEFAULT_WEIGHT_AMENITY,
            brand: defaults::DEFAULT_WEIGHT_BRAND,
            location: defaults::DEFAULT_WEIGHT_LOCATION,
            rating: defaults::DEFAULT_WEIGHT_RATING,
            price: defaults::DEFAULT_WEIGHT_PRICE,
        }
    }
}

/// Penalty applied when the normalized price is strictly above `above`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub above: f64,
    pub penalty: f64,
}

/// Score awarded when a rating is at least `min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingStep {
    pub min: f64,
    pub score: f64,
}

/// Scoring subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Cards with a total below this are discarded.
    pub min_score: f64,
    /// Score for a rating below every step.
    pub poor_rating_score: f64,
    pub weights: ScoringWeights,
    /// Checked highest first.
    pub price_tiers: Vec<PriceTier>,
    /// Checked highest first.
    pub rating_steps: Vec<RatingStep>,
}

impl ScoringConfig {
    /// Price tiers sorted by descending threshold.
    pub fn sorted_price_tiers(&self) -> Vec<PriceTier> {
        let mut tiers = self.price_tiers.clone();
        tiers.sort_by(|a, b| b.above.total_cmp(&a.above));
        tiers
    }

    /// Rating steps sorted by descending minimum.
    pub fn sorted_rating_steps(&self) -> Vec<RatingStep> {
        let mut steps = self.rating_steps.clone();
        steps.sort_by(|a, b| b.min.total_cmp(&a.min));
        steps
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_score: defaults::DEFAULT_MIN_SCORE,
            poor_rating_score: defaults::DEFAULT_POOR_RATING_SCORE,
            weights: ScoringWeights::default(),
            price_tiers: vec![
                PriceTier { above: 1500.0, penalty: -0.4 },
                PriceTier { above: 1000.0, penalty: -0.2 },
                PriceTier { above: 500.0, penalty: -0.1 },
            ],
            rating_steps: vec![
                RatingStep { min: 5.0, score: 1.0 },
                RatingStep { min: 4.5, score: 0.8 },
                RatingStep { min: 4.0, score: 0.6 },
                RatingStep { min: 3.5, score: 0.4 },
                RatingStep { min: 3.0, score: 0.2 },
            ],
        }
    }
}
