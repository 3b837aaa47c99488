//! Compiled defaults for every rule table.

pub const DEFAULT_MIN_PHOTOS: usize = 3;
pub const DEFAULT_MIN_RATING: f64 = 4.0;
/// Maximum best-offer price in the reference currency before the wow override is required.
pub const DEFAULT_MAX_PRICE: f64 = 2000.0;

pub const DEFAULT_MIN_SCORE: f64 = 0.35;

pub const DEFAULT_WEIGHT_VISUAL: f64 = 0.25;
pub const DEFAULT_WEIGHT_AMENITY: f64 = 0.20;
pub const DEFAULT_WEIGHT_BRAND: f64 = 0.10;
pub const DEFAULT_WEIGHT_LOCATION: f64 = 0.20;
pub const DEFAULT_WEIGHT_RATING: f64 = 0.15;
pub const DEFAULT_WEIGHT_PRICE: f64 = 0.10;

pub const DEFAULT_POOR_RATING_SCORE: f64 = -0.2;

pub const DEFAULT_REFERENCE_CURRENCY: &str = "USD";
pub const DEFAULT_UNKNOWN_CURRENCY_RATE: f64 = 1.0;

pub const DEFAULT_TIER_CUTOFFS: [f64; 2] = [0.6, 0.45];

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
