use wander_core::config::AmenityConfig;
use wander_core::models::HotelContent;
use wander_core::traits::{KeywordClass, TextSignals};

const WATER_COMBINED: f64 = 0.5;
const WATER_SINGLE: f64 = 0.3;
const WELLNESS: f64 = 0.3;
const DESIGN_HERITAGE: f64 = 0.3;
const PREMIUM_CODE: f64 = 0.2;
const LUXURY: f64 = 0.2;
const ROMANCE: f64 = 0.1;

/// Amenity appeal from amenity codes and description keywords.
///
/// Contributions are additive and may exceed 1.0 before clipping.
/// Range: 0.0 – 1.0.
pub fn calculate(content: &HotelContent, description: &TextSignals, amenities: &AmenityConfig) -> f64 {
    let mut score = 0.0;

    let premium_water = content.has_amenity_in(&amenities.premium_water)
        || description.has(KeywordClass::PremiumWater);
    let pool_feature =
        description.has_any(&[KeywordClass::InfinityPool, KeywordClass::RooftopPool]);
    score += match (premium_water, pool_feature) {
        (true, true) => WATER_COMBINED,
        (true, false) | (false, true) => WATER_SINGLE,
        (false, false) => 0.0,
    };

    if content.has_amenity_in(&amenities.wellness) || description.has(KeywordClass::Wellness) {
        score += WELLNESS;
    }
    if description.has_any(&[KeywordClass::Design, KeywordClass::Heritage]) {
        score += DESIGN_HERITAGE;
    }
    if content.has_amenity_in(&amenities.premium) {
        score += PREMIUM_CODE;
    }
    if description.has(KeywordClass::Luxury) {
        score += LUXURY;
    }
    if description.has_any(&[KeywordClass::Romance, KeywordClass::AdultsOnly]) {
        score += ROMANCE;
    }

    score.min(1.0)
}
