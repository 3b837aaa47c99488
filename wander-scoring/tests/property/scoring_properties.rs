use std::sync::Arc;

use proptest::prelude::*;
use test_fixtures::HotelBuilder;
use wander_core::config::WanderConfig;
use wander_scoring::ScoringEngine;
use wander_signals::SignalExtractor;

const WORDS: &[&str] = &[
    "beach", "infinity pool", "lagoon", "spa", "design hotel", "luxury", "romantic", "volcano",
    "vineyard", "unesco", "paris", "rooms", "quiet",
];
const CATEGORIES: &[&str] = &["EXTERIOR", "ROOM", "SUITE", "POOL", "LOBBY", "BAR"];

// ── Score non-negativity ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn total_is_never_negative(
        rating in prop::option::of(0.0f64..5.5),
        price in 0.0f64..50_000.0,
        photos in prop::collection::vec(prop::sample::select(CATEGORIES), 0..12),
        words in prop::collection::vec(prop::sample::select(WORDS), 0..10),
    ) {
        let mut builder = HotelBuilder::new("p1")
            .description(&words.join(" "))
            .price(&format!("{price:.2}"), "USD");
        if let Some(r) = rating {
            builder = builder.rating(r);
        }
        for category in photos {
            builder = builder.photo(category);
        }
        let hotel = builder.build();

        let config = Arc::new(WanderConfig::default());
        let signals = SignalExtractor::new(config.clone()).extract_hotel(&hotel);
        let s = ScoringEngine::new(config).score(&hotel, &signals);

        prop_assert!(s.total >= 0.0);
        prop_assert!(s.total <= 1.0);
        for component in [s.visual, s.amenity, s.brand, s.location] {
            prop_assert!((0.0..=1.0).contains(&component));
        }
        prop_assert!((-0.2..=1.0).contains(&s.rating));
        prop_assert!((-0.4..=0.0).contains(&s.price));
    }
}
