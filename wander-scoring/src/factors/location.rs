use wander_core::config::LocationConfig;
use wander_core::models::HotelIdentity;
use wander_core::traits::{KeywordClass, TextSignals};

const TOP_CITY: f64 = 0.5;
const BEACH: f64 = 0.5;
const MOUNTAIN: f64 = 0.3;
const VINEYARD: f64 = 0.2;
const CULTURE: f64 = 0.2;

/// Destination appeal.
///
/// A top-inspiration city counts once whether it is found by city code, by the
/// structured city name, or in the description.
/// Range: 0.0 – 1.0 (additive, clipped).
pub fn calculate(
    identity: &HotelIdentity,
    description: &TextSignals,
    city: &TextSignals,
    locations: &LocationConfig,
) -> f64 {
    let mut score = 0.0;

    if locations.is_top_city_code(&identity.city_code)
        || city.has(KeywordClass::TopCity)
        || description.has(KeywordClass::TopCity)
    {
        score += TOP_CITY;
    }
    if description.has(KeywordClass::Beach) {
        score += BEACH;
    }
    if description.has(KeywordClass::Mountain) {
        score += MOUNTAIN;
    }
    if description.has(KeywordClass::Vineyard) {
        score += VINEYARD;
    }
    if description.has(KeywordClass::Culture) {
        score += CULTURE;
    }

    score.min(1.0)
}
