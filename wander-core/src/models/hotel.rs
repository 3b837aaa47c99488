//! Raw hotel records as supplied by the external fetch layer.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One input unit: identity, descriptive content, and price-sorted offers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHotel {
    pub hotel: HotelIdentity,
    #[serde(default)]
    pub content: HotelContent,
    /// Sorted ascending by price; the first offer is the best price.
    #[serde(default)]
    pub offers: Vec<HotelOffer>,
}

impl RawHotel {
    pub fn id(&self) -> &str {
        &self.hotel.hotel_id
    }

    /// The best-price offer, if any.
    pub fn best_offer(&self) -> Option<&HotelOffer> {
        self.offers.first()
    }

    pub fn description_text(&self) -> Option<&str> {
        self.content
            .description
            .as_ref()
            .map(|d| d.text.as_str())
            .filter(|t| !t.trim().is_empty())
    }
}

/// Immutable hotel identity from the search provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelIdentity {
    pub hotel_id: String,
    pub name: String,
    #[serde(default)]
    pub chain_code: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    pub city_code: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Structured city name, when the fetch layer supplies one.
    #[serde(default)]
    pub city_name: Option<String>,
    /// Structured country, when the fetch layer supplies one.
    #[serde(default)]
    pub country: Option<String>,
}

/// Descriptive content: text, amenities, media, third-party ratings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelContent {
    pub hotel_id: String,
    pub name: String,
    pub description: Option<Description>,
    /// Provider amenity codes, e.g. `SWIMMING_POOL`, `SPA`.
    pub amenities: BTreeSet<String>,
    pub media: Vec<MediaItem>,
    pub ratings: Vec<ThirdPartyRating>,
}

impl HotelContent {
    pub fn has_amenity_in(&self, codes: &[String]) -> bool {
        codes.iter().any(|c| self.amenities.contains(c))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Description {
    pub text: String,
    #[serde(default)]
    pub lang: Option<String>,
}

/// A provider photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub uri: String,
    #[serde(default)]
    pub category: Option<MediaCategory>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl MediaItem {
    pub fn is_at_least(&self, min_width: u32, min_height: u32) -> bool {
        matches!(
            (self.width, self.height),
            (Some(w), Some(h)) if w >= min_width && h >= min_height
        )
    }

    pub fn is_exterior(&self) -> bool {
        matches!(self.category, Some(MediaCategory::Exterior))
    }

    /// Room or suite photo.
    pub fn is_room(&self) -> bool {
        matches!(
            self.category,
            Some(MediaCategory::Room) | Some(MediaCategory::Suite)
        )
    }
}

/// Photo category code. Unknown provider codes are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaCategory {
    Exterior,
    Room,
    Suite,
    Other(String),
}

impl MediaCategory {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Exterior => "EXTERIOR",
            Self::Room => "ROOM",
            Self::Suite => "SUITE",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for MediaCategory {
    fn from(code: String) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "EXTERIOR" => Self::Exterior,
            "ROOM" => Self::Room,
            "SUITE" => Self::Suite,
            _ => Self::Other(code),
        }
    }
}

impl From<&str> for MediaCategory {
    fn from(code: &str) -> Self {
        Self::from(code.to_string())
    }
}

impl From<MediaCategory> for String {
    fn from(category: MediaCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A commercial offer. Only the price is consumed by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelOffer {
    pub price: Price,
    #[serde(default)]
    pub room_category: Option<String>,
}

/// Provider price: decimal string plus ISO currency code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub total: String,
    pub currency: String,
}

impl Price {
    pub fn new(total: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            total: total.into(),
            currency: currency.into(),
        }
    }

    /// Parsed amount; `None` when the decimal string is malformed or not finite.
    pub fn amount(&self) -> Option<f64> {
        self.total
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
    }
}

/// A rating from a review site. The value arrives as provider text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirdPartyRating {
    pub provider: String,
    pub value: String,
}
