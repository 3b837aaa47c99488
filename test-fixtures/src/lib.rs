//! Test fixtures for the Wander workspace.
//!
//! Fluent builders for raw hotels and curated cards, plus typed loading of the
//! JSON golden batches under `test-fixtures/golden/`.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

use wander_core::models::{
    CuratedCard, Description, HotelContent, HotelIdentity, HotelOffer, MediaCategory, MediaItem,
    Price, RawHotel, ScoreComponents, ThirdPartyRating,
};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// The mixed golden batch: one hotel per funnel outcome plus several survivors.
pub fn golden_batch() -> Vec<RawHotel> {
    load_fixture("golden/hotel_batch.json")
}

/// Fluent builder for [`RawHotel`].
#[derive(Debug, Clone)]
pub struct HotelBuilder {
    hotel: RawHotel,
}

impl HotelBuilder {
    /// A bare hotel: no photos, no rating, no offers, city `MAD`.
    pub fn new(id: &str) -> Self {
        let name = format!("Hotel {id}");
        Self {
            hotel: RawHotel {
                hotel: HotelIdentity {
                    hotel_id: id.to_string(),
                    name: name.clone(),
                    chain_code: None,
                    rating: None,
                    city_code: "MAD".to_string(),
                    latitude: 40.4168,
                    longitude: -3.7038,
                    city_name: None,
                    country: None,
                },
                content: HotelContent {
                    hotel_id: id.to_string(),
                    name,
                    ..Default::default()
                },
                offers: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.hotel.hotel.name = name.to_string();
        self.hotel.content.name = name.to_string();
        self
    }

    pub fn chain(mut self, code: &str) -> Self {
        self.hotel.hotel.chain_code = Some(code.to_string());
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.hotel.hotel.rating = Some(rating);
        self
    }

    pub fn no_rating(mut self) -> Self {
        self.hotel.hotel.rating = None;
        self
    }

    pub fn city_code(mut self, code: &str) -> Self {
        self.hotel.hotel.city_code = code.to_string();
        self
    }

    /// Structured city and country.
    pub fn located(mut self, city: &str, country: &str) -> Self {
        self.hotel.hotel.city_name = Some(city.to_string());
        self.hotel.hotel.country = Some(country.to_string());
        self
    }

    pub fn coords(mut self, latitude: f64, longitude: f64) -> Self {
        self.hotel.hotel.latitude = latitude;
        self.hotel.hotel.longitude = longitude;
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.hotel.content.description = Some(Description {
            text: text.to_string(),
            lang: Some("en".to_string()),
        });
        self
    }

    pub fn amenity(mut self, code: &str) -> Self {
        self.hotel.content.amenities.insert(code.to_string());
        self
    }

    pub fn photo(self, category: &str) -> Self {
        self.media(Some(category), None)
    }

    pub fn photo_sized(self, category: &str, width: u32, height: u32) -> Self {
        self.media(Some(category), Some((width, height)))
    }

    /// `count` photos without a category.
    pub fn plain_photos(mut self, count: usize) -> Self {
        for _ in 0..count {
            self = self.media(None, None);
        }
        self
    }

    pub fn clear_photos(mut self) -> Self {
        self.hotel.content.media.clear();
        self
    }

    fn media(mut self, category: Option<&str>, size: Option<(u32, u32)>) -> Self {
        let n = self.hotel.content.media.len();
        self.hotel.content.media.push(MediaItem {
            uri: format!("https://img.example/{}/{}.jpg", self.hotel.hotel.hotel_id, n),
            category: category.map(MediaCategory::from),
            width: size.map(|s| s.0),
            height: size.map(|s| s.1),
        });
        self
    }

    pub fn review(mut self, provider: &str, value: &str) -> Self {
        self.hotel.content.ratings.push(ThirdPartyRating {
            provider: provider.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn price(mut self, total: &str, currency: &str) -> Self {
        self.hotel.offers.push(HotelOffer {
            price: Price::new(total, currency),
            room_category: None,
        });
        self
    }

    pub fn clear_offers(mut self) -> Self {
        self.hotel.offers.clear();
        self
    }

    pub fn build(self) -> RawHotel {
        self.hotel
    }
}

/// A hotel that passes every gate with a total score of roughly 0.43:
/// six categorized photos (one high-res exterior), a 4.6 rating, a pool,
/// a neutral description, and a USD 300 best offer.
pub fn curatable_hotel(id: &str) -> HotelBuilder {
    HotelBuilder::new(id)
        .rating(4.6)
        .description("Comfortable rooms in a quiet neighbourhood near the station.")
        .amenity("SWIMMING_POOL")
        .amenity("WIFI")
        .photo_sized("EXTERIOR", 1600, 1000)
        .photo("ROOM")
        .photo("SUITE")
        .photo("POOL")
        .photo("LOBBY")
        .photo("RESTAURANT")
        .price("300.00", "USD")
}

/// A curated card with only the fields diversification cares about filled in.
pub fn card(id: &str, city: &str, chain: Option<&str>, total: f64) -> CuratedCard {
    CuratedCard {
        hotel_id: id.to_string(),
        name: format!("Hotel {id}"),
        city: city.to_string(),
        country: None,
        city_code: city.chars().take(3).collect::<String>().to_uppercase(),
        latitude: 0.0,
        longitude: 0.0,
        best_price: None,
        photos: Vec::new(),
        hero_photo: None,
        description: None,
        tags: Vec::new(),
        score: ScoreComponents {
            total,
            ..Default::default()
        },
        rating: None,
        chain_code: chain.map(str::to_string),
    }
}
