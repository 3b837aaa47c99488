//! Fixed approximate conversion into the reference currency.
//!
//! These are not live FX rates; price thresholds are approximate comparisons.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::HotelOffer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub reference: String,
    /// Multiplier for codes missing from `rates`.
    pub unknown_rate: f64,
    /// Multiplier from the keyed ISO code into the reference currency.
    pub rates: BTreeMap<String, f64>,
}

impl CurrencyConfig {
    pub fn rate(&self, currency: &str) -> f64 {
        let code = currency.trim().to_ascii_uppercase();
        if code.eq_ignore_ascii_case(self.reference.trim()) {
            return 1.0;
        }
        self.rates.get(&code).copied().unwrap_or(self.unknown_rate)
    }

    pub fn normalize(&self, amount: f64, currency: &str) -> f64 {
        amount * self.rate(currency)
    }

    /// Offer price in the reference currency; `None` if the amount is malformed.
    pub fn normalize_offer(&self, offer: &HotelOffer) -> Option<f64> {
        offer
            .price
            .amount()
            .map(|amount| self.normalize(amount, &offer.price.currency))
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        let mut rates = BTreeMap::new();
        rates.insert("EUR".to_string(), 1.1);
        rates.insert("GBP".to_string(), 1.3);
        Self {
            reference: defaults::DEFAULT_REFERENCE_CURRENCY.to_string(),
            unknown_rate: defaults::DEFAULT_UNKNOWN_CURRENCY_RATE,
            rates,
        }
    }
}
