//! Curated card construction.

use std::sync::LazyLock;

use regex::Regex;
use wander_core::models::{CuratedCard, HotelIdentity, HotelSignals, RawHotel, ScoreComponents};

/// Trailing `"City, Country"` locality segment. The city side is one to three
/// capitalized words that open a segment: text start, a sentence break, a
/// comma, or a locative preposition.
static CITY_COUNTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^|[.;:!?]\s+|,\s*|\s(?:in|at|near|of|from)\s+)(\p{Lu}[\p{L}'-]*(?: \p{Lu}[\p{L}'-]*){0,2}),\s*(\p{Lu}[\p{L}'-]*(?: \p{Lu}[\p{L}'-]*){0,2})\.?\s*$",
    )
    .expect("Invalid city/country regex")
});

/// City and country for a card.
///
/// Structured fields win. Without them, a trailing `"City, Country"` in the
/// description is used unless it merely repeats the hotel's name, and the raw
/// city code is the last resort.
pub fn resolve_location(
    identity: &HotelIdentity,
    description: Option<&str>,
) -> (String, Option<String>) {
    let structured_country = identity
        .country
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    if let Some(city) = identity
        .city_name
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        return (city.to_string(), structured_country);
    }

    if let Some((city, country)) = description
        .and_then(parse_city_country)
        .filter(|(city, _)| !names_the_hotel(city, &identity.name))
    {
        return (city, structured_country.or(Some(country)));
    }

    (identity.city_code.trim().to_string(), structured_country)
}

/// Parse a trailing `"City, Country"` suffix.
pub fn parse_city_country(text: &str) -> Option<(String, String)> {
    let caps = CITY_COUNTRY.captures(text)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

/// A multi-word candidate made only of words from the hotel's name is the
/// name, not a locality ("The Ritz Paris, France").
fn names_the_hotel(candidate: &str, hotel_name: &str) -> bool {
    let name_words: Vec<String> = hotel_name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();
    let words: Vec<String> = candidate.split_whitespace().map(str::to_lowercase).collect();
    words.len() > 1 && words.iter().all(|w| name_words.contains(w))
}

/// Build the card for a hotel that passed every gate and the threshold.
pub fn build_card(hotel: &RawHotel, signals: &HotelSignals, score: ScoreComponents) -> CuratedCard {
    let description = hotel.description_text();
    let (city, country) = resolve_location(&hotel.hotel, description);

    CuratedCard {
        hotel_id: hotel.hotel.hotel_id.clone(),
        name: hotel.hotel.name.clone(),
        city,
        country,
        city_code: hotel.hotel.city_code.clone(),
        latitude: hotel.hotel.latitude,
        longitude: hotel.hotel.longitude,
        best_price: hotel.best_offer().map(|o| o.price.clone()),
        photos: hotel.content.media.iter().map(|m| m.uri.clone()).collect(),
        hero_photo: signals.hero_photo.clone(),
        description: description.map(str::to_string),
        tags: signals.tags.to_vec(),
        score,
        rating: signals.effective_rating(hotel.hotel.rating),
        chain_code: signals.brand.chain_code.clone(),
    }
}
