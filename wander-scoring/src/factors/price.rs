use wander_core::config::{CurrencyConfig, ScoringConfig};
use wander_core::models::HotelOffer;

/// Price penalty on the normalized best offer.
///
/// Never penalizes wow hotels, hotels without offers, or unparsable prices.
/// Otherwise applies the highest tier whose threshold the price exceeds.
/// Range: min(tier penalties) – 0.0.
pub fn calculate(
    best_offer: Option<&HotelOffer>,
    has_wow_amenities: bool,
    scoring: &ScoringConfig,
    currency: &CurrencyConfig,
) -> f64 {
    if has_wow_amenities {
        return 0.0;
    }
    let Some(price) = best_offer.and_then(|offer| currency.normalize_offer(offer)) else {
        return 0.0;
    };
    scoring
        .sorted_price_tiers()
        .iter()
        .find(|tier| price > tier.above)
        .map(|tier| tier.penalty)
        .unwrap_or(0.0)
}
