//! Gate 4: Price. Is the best offer within budget, or exceptional enough not to matter?

use wander_core::models::GateId;

use crate::types::*;

pub struct PriceGate;

impl HotelGate for PriceGate {
    fn id(&self) -> GateId {
        GateId::Price
    }

    fn name(&self) -> &'static str {
        "Price"
    }

    fn description(&self) -> &'static str {
        "Caps the normalized best price unless the hotel has wow amenities"
    }

    fn evaluate(&self, input: &GateInput<'_>) -> GateResult {
        let Some(offer) = input.hotel.best_offer() else {
            return GateResult::pass(GateId::Price, "no offers");
        };
        let Some(price) = input.config.currency.normalize_offer(offer) else {
            return GateResult::pass(GateId::Price, "unparsable price");
        };

        let max = input.config.gates.max_price;
        if price <= max {
            GateResult::pass(GateId::Price, format!("price {price:.0}"))
        } else if input.signals.has_wow_amenities {
            GateResult::pass(GateId::Price, format!("price {price:.0} above {max:.0}, wow override"))
        } else {
            GateResult::fail(GateId::Price, format!("price {price:.0} above {max:.0}"))
        }
    }
}
