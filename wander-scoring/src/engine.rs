use std::sync::Arc;

use wander_core::config::WanderConfig;
use wander_core::models::{HotelSignals, RawHotel, ScoreComponents};

use crate::factors::ScoringContext;
use crate::formula;

/// Scores gated hotels and applies the minimum-score threshold.
pub struct ScoringEngine {
    config: Arc<WanderConfig>,
}

impl ScoringEngine {
    pub fn new(config: Arc<WanderConfig>) -> Self {
        Self { config }
    }

    /// Cards scoring below this are discarded.
    pub fn min_score(&self) -> f64 {
        self.config.scoring.min_score
    }

    /// Score one hotel with a full breakdown.
    pub fn score(&self, hotel: &RawHotel, signals: &HotelSignals) -> ScoreComponents {
        let ctx = ScoringContext::new(hotel, signals, &self.config);
        let components = formula::compute_breakdown(&ctx);
        tracing::trace!(
            hotel_id = %hotel.id(),
            total = components.total,
            visual = components.visual,
            amenity = components.amenity,
            rating = components.rating,
            price = components.price,
            "hotel scored"
        );
        components
    }

    pub fn passes_threshold(&self, score: &ScoreComponents) -> bool {
        score.total >= self.min_score()
    }
}
