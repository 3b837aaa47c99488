use wander_core::config::ScoringWeights;
use wander_core::models::ScoreComponents;

use crate::factors::{self, ScoringContext};

/// Every factor component plus the 6-factor weighted total.
///
/// ```text
/// total = max(0,
///     w_visual   × visual
///   + w_amenity  × amenity
///   + w_brand    × brand
///   + w_location × location
///   + w_rating   × rating
///   + w_price    × price)
/// ```
///
/// Only `rating` and `price` can be negative, so the floor only bites for
/// poorly rated or expensive hotels with little else going for them.
pub fn compute_breakdown(ctx: &ScoringContext<'_>) -> ScoreComponents {
    let ScoringContext {
        hotel,
        signals,
        config,
    } = *ctx;

    let visual = factors::visual::calculate(&hotel.content.media);
    let amenity =
        factors::amenity::calculate(&hotel.content, &signals.description, &config.amenities);
    let brand = factors::brand::calculate(&signals.brand, &signals.name);
    let location = factors::location::calculate(
        &hotel.hotel,
        &signals.description,
        &signals.city,
        &config.locations,
    );
    let rating = factors::rating::calculate(
        signals.effective_rating(hotel.hotel.rating),
        &config.scoring,
    );
    let price = factors::price::calculate(
        hotel.best_offer(),
        signals.has_wow_amenities,
        &config.scoring,
        &config.currency,
    );

    let mut components = ScoreComponents {
        visual,
        amenity,
        brand,
        location,
        rating,
        price,
        total: 0.0,
    };
    components.total = weighted_total(&components, &config.scoring.weights);
    components
}

/// Weighted sum of the six components, floored at zero.
pub fn weighted_total(c: &ScoreComponents, w: &ScoringWeights) -> f64 {
    let sum = w.visual * c.visual
        + w.amenity * c.amenity
        + w.brand * c.brand
        + w.location * c.location
        + w.rating * c.rating
        + w.price * c.price;
    sum.max(0.0)
}
