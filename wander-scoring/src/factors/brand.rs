use wander_core::models::BrandInfo;
use wander_core::traits::{KeywordClass, TextSignals};

const PREMIUM: f64 = 0.6;
const BOUTIQUE: f64 = 0.3;
const LUXURY_NAME: f64 = 0.2;

/// Brand prestige.
///
/// 0 blacklisted, 0.6 premium, 0.3 boutique, 0.2 for a luxury word in the
/// name (luxury, grand, palace, ...), else 0.
pub fn calculate(brand: &BrandInfo, name: &TextSignals) -> f64 {
    if brand.blacklisted {
        0.0
    } else if brand.premium {
        PREMIUM
    } else if brand.boutique {
        BOUTIQUE
    } else if name.has(KeywordClass::LuxuryName) {
        LUXURY_NAME
    } else {
        0.0
    }
}
