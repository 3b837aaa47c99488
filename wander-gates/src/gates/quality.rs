//! Gate 3: Quality. Is the hotel well rated, or exceptional enough without a rating?

use wander_core::models::GateId;

use crate::types::*;

pub struct QualityGate;

impl HotelGate for QualityGate {
    fn id(&self) -> GateId {
        GateId::Quality
    }

    fn name(&self) -> &'static str {
        "Quality"
    }

    fn description(&self) -> &'static str {
        "Requires a minimum rating; unrated hotels need photos and a wow amenity"
    }

    fn evaluate(&self, input: &GateInput<'_>) -> GateResult {
        let min = input.config.gates.min_rating;
        let signals = input.signals;

        match signals.effective_rating(input.hotel.hotel.rating) {
            Some(rating) if rating >= min => {
                GateResult::pass(GateId::Quality, format!("rating {rating:.1}"))
            }
            // A known low rating is never rescued by amenities.
            Some(rating) => GateResult::fail(
                GateId::Quality,
                format!("rating {rating:.1} below {min:.1}"),
            ),
            None if signals.has_photo_gate && signals.has_wow_amenities => {
                GateResult::pass(GateId::Quality, "unrated, wow amenities")
            }
            None => GateResult::fail(GateId::Quality, "unrated without wow amenities"),
        }
    }
}
