use serde::{Deserialize, Serialize};

/// Per-hotel scoring breakdown.
///
/// Components sit roughly in [-0.4, 1.0]; `total` is the weighted sum floored at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub visual: f64,
    pub amenity: f64,
    pub brand: f64,
    pub location: f64,
    pub rating: f64,
    pub price: f64,
    pub total: f64,
}
