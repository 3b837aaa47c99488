use std::sync::Arc;

use proptest::prelude::*;
use test_fixtures::HotelBuilder;
use wander_core::config::WanderConfig;
use wander_core::constants::MAX_TAGS_PER_CARD;
use wander_signals::SignalExtractor;

const WORDS: &[&str] = &[
    "beach", "island", "infinity pool", "rooftop", "private pool", "design hotel", "historic",
    "spa", "jungle", "skyline", "villa", "adults only", "golf", "all inclusive", "panoramic",
    "romantic", "quiet", "rooms", "breakfast", "station",
];

const AMENITIES: &[&str] = &[
    "BEACH", "SPA", "GOLF", "SAUNA", "ANIMAL_WATCHING", "NO_KID_ALLOWED", "WIFI", "PARKING",
];

fn arb_description() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..20).prop_map(|w| w.join(" "))
}

fn arb_amenities() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(AMENITIES), 0..6)
}

// ── Tag cap ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn never_more_than_three_tags(
        description in arb_description(),
        amenities in arb_amenities(),
    ) {
        let extractor = SignalExtractor::new(Arc::new(WanderConfig::default()));
        let mut builder = HotelBuilder::new("p1").description(&description);
        for code in amenities {
            builder = builder.amenity(code);
        }
        let signals = extractor.extract_hotel(&builder.build());
        prop_assert!(signals.tags.len() <= MAX_TAGS_PER_CARD);

        let mut ids: Vec<&str> = signals.tags.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), signals.tags.len());
    }
}

// ── Photo gate ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn photo_gate_requires_min_count(plain in 0usize..8, rooms in 0usize..3) {
        let extractor = SignalExtractor::new(Arc::new(WanderConfig::default()));
        let mut builder = HotelBuilder::new("p1").plain_photos(plain);
        for _ in 0..rooms {
            builder = builder.photo("ROOM");
        }
        let signals = extractor.extract_hotel(&builder.build());
        prop_assert_eq!(signals.has_photo_gate, plain + rooms >= 3 && rooms > 0);
    }
}
