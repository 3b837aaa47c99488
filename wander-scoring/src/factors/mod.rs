//! Individual score components. Each factor is a pure function of the
//! hotel, its extracted signals, and the rule tables.

pub mod amenity;
pub mod brand;
pub mod location;
pub mod price;
pub mod rating;
pub mod visual;

use wander_core::config::WanderConfig;
use wander_core::models::{HotelSignals, RawHotel};

/// Everything a factor may look at.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub hotel: &'a RawHotel,
    pub signals: &'a HotelSignals,
    pub config: &'a WanderConfig,
}

impl<'a> ScoringContext<'a> {
    pub fn new(hotel: &'a RawHotel, signals: &'a HotelSignals, config: &'a WanderConfig) -> Self {
        Self {
            hotel,
            signals,
            config,
        }
    }
}
