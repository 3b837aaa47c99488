//! Gate 2: Brand. Is the chain on the blacklist?

use wander_core::models::GateId;

use crate::types::*;

pub struct BrandGate;

impl HotelGate for BrandGate {
    fn id(&self) -> GateId {
        GateId::Brand
    }

    fn name(&self) -> &'static str {
        "Brand"
    }

    fn description(&self) -> &'static str {
        "Rejects blacklisted chains and budget brand names"
    }

    fn evaluate(&self, input: &GateInput<'_>) -> GateResult {
        let brand = &input.signals.brand;
        if brand.blacklisted {
            let chain = brand.chain_code.as_deref().unwrap_or("-");
            GateResult::fail(GateId::Brand, format!("blacklisted brand (chain {chain})"))
        } else {
            GateResult::pass(GateId::Brand, "brand allowed")
        }
    }
}
