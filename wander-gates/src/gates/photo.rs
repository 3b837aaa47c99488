//! Gate 1: Photo. Is there enough imagery to build a card?

use wander_core::models::GateId;

use crate::types::*;

pub struct PhotoGate;

impl HotelGate for PhotoGate {
    fn id(&self) -> GateId {
        GateId::Photo
    }

    fn name(&self) -> &'static str {
        "Photo"
    }

    fn description(&self) -> &'static str {
        "Requires a minimum photo count including an exterior, room, or suite shot"
    }

    fn evaluate(&self, input: &GateInput<'_>) -> GateResult {
        let count = input.hotel.content.media.len();
        if input.signals.has_photo_gate {
            GateResult::pass(GateId::Photo, format!("{count} photos"))
        } else {
            GateResult::fail(
                GateId::Photo,
                format!(
                    "{count} photos, need {} with an exterior, room, or suite shot",
                    input.config.gates.min_photos
                ),
            )
        }
    }
}
