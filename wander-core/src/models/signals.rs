//! Signals derived from a raw hotel by the extractor.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::MAX_TAGS_PER_CARD;
use crate::traits::TextSignals;

/// Experiential tag category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Location,
    Amenity,
    Style,
    Accommodation,
    Service,
}

impl TagCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Amenity => "amenity",
            Self::Style => "style",
            Self::Accommodation => "accommodation",
            Self::Service => "service",
        }
    }
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A short experiential label shown on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub label: String,
    pub category: TagCategory,
}

impl Tag {
    pub fn new(id: impl Into<String>, label: impl Into<String>, category: TagCategory) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category,
        }
    }
}

/// Tags kept for a card, inline up to the per-card cap.
pub type TagList = SmallVec<[Tag; MAX_TAGS_PER_CARD]>;

/// Brand classification. At most one of the flags is set:
/// blacklisted wins over premium, which wins over boutique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInfo {
    pub premium: bool,
    pub boutique: bool,
    pub blacklisted: bool,
    pub chain_code: Option<String>,
}

impl BrandInfo {
    pub fn blacklisted(chain_code: Option<String>) -> Self {
        Self {
            blacklisted: true,
            chain_code,
            ..Default::default()
        }
    }

    pub fn premium(chain_code: Option<String>) -> Self {
        Self {
            premium: true,
            chain_code,
            ..Default::default()
        }
    }

    pub fn boutique(chain_code: Option<String>) -> Self {
        Self {
            boutique: true,
            chain_code,
            ..Default::default()
        }
    }

    pub fn independent(chain_code: Option<String>) -> Self {
        Self {
            chain_code,
            ..Default::default()
        }
    }

    pub fn is_independent(&self) -> bool {
        !self.premium && !self.boutique && !self.blacklisted
    }
}

/// Everything the gates and the scorer need to know about one hotel.
///
/// Never persisted on its own; lives only for the duration of one evaluation.
#[derive(Debug, Clone, Default)]
pub struct HotelSignals {
    pub tags: TagList,
    pub brand: BrandInfo,
    pub has_photo_gate: bool,
    pub has_wow_amenities: bool,
    /// Third-party rating parsed from content, if any.
    pub extracted_rating: Option<f64>,
    pub hero_photo: Option<String>,
    /// Keyword classes found in the description.
    pub description: TextSignals,
    /// Keyword classes found in the hotel name.
    pub name: TextSignals,
    /// Keyword classes found in the structured city name.
    pub city: TextSignals,
}

impl HotelSignals {
    /// Description and name signals combined.
    pub fn text(&self) -> TextSignals {
        self.description.union(self.name)
    }

    /// Rating used by the quality gate and the rating score: the hotel-level
    /// rating if present and non-zero, else the extracted third-party rating.
    pub fn effective_rating(&self, hotel_rating: Option<f64>) -> Option<f64> {
        let usable = |r: &f64| r.is_finite() && *r > 0.0;
        hotel_rating
            .filter(usable)
            .or_else(|| self.extracted_rating.filter(usable))
    }
}
