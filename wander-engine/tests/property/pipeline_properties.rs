use std::sync::Arc;

use proptest::prelude::*;
use test_fixtures::HotelBuilder;
use wander_core::config::WanderConfig;
use wander_core::models::RawHotel;
use wander_engine::CurationPipeline;

const CATEGORIES: &[&str] = &["EXTERIOR", "ROOM", "SUITE", "POOL", "LOBBY", "SPA", "BEACH"];
const CHAINS: &[&str] = &["RZ", "FS", "SL", "S8", "MO"];
const AMENITIES: &[&str] = &["SWIMMING_POOL", "SPA", "GOLF", "BEACH", "WIFI", "PARKING"];
const CITIES: &[(&str, &str)] = &[("PAR", "Paris"), ("LIS", "Lisbon"), ("ROM", "Rome")];
const DESCRIPTIONS: &[&str] = &[
    "",
    "An infinity pool above the bay with a spa and a private beach.",
    "Historic rooms in the old town, steps from the cathedral.",
    "Adults only villas with rooftop views.",
    "Budget rooms near the airport.",
];

#[derive(Debug, Clone)]
struct HotelShape {
    photos: Vec<&'static str>,
    chain: Option<&'static str>,
    amenities: Vec<&'static str>,
    rating: Option<f64>,
    price: Option<u32>,
    city: (&'static str, &'static str),
    description: &'static str,
}

fn arb_shape() -> impl Strategy<Value = HotelShape> {
    (
        prop::collection::vec(prop::sample::select(CATEGORIES), 0..8),
        prop::option::of(prop::sample::select(CHAINS)),
        prop::collection::vec(prop::sample::select(AMENITIES), 0..4),
        prop::option::of(1.0f64..5.0),
        prop::option::of(50u32..3000),
        prop::sample::select(CITIES),
        prop::sample::select(DESCRIPTIONS),
    )
        .prop_map(
            |(photos, chain, amenities, rating, price, city, description)| HotelShape {
                photos,
                chain,
                amenities,
                rating,
                price,
                city,
                description,
            },
        )
}

fn build(id: usize, shape: &HotelShape) -> RawHotel {
    let mut b = HotelBuilder::new(&format!("h{id}"))
        .city_code(shape.city.0)
        .located(shape.city.1, "Somewhere");
    for category in &shape.photos {
        b = b.photo(category);
    }
    if let Some(chain) = shape.chain {
        b = b.chain(chain);
    }
    for amenity in &shape.amenities {
        b = b.amenity(amenity);
    }
    if let Some(rating) = shape.rating {
        b = b.rating(rating);
    }
    if let Some(price) = shape.price {
        b = b.price(&format!("{price}.00"), "USD");
    }
    if !shape.description.is_empty() {
        b = b.description(shape.description);
    }
    b.build()
}

fn arb_batch() -> impl Strategy<Value = Vec<RawHotel>> {
    prop::collection::vec(arb_shape(), 0..25).prop_map(|shapes| {
        shapes
            .iter()
            .enumerate()
            .map(|(i, s)| build(i, s))
            .collect()
    })
}

fn pipeline() -> CurationPipeline {
    CurationPipeline::new(Arc::new(WanderConfig::default()))
}

// ── Funnel ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_hotel_is_either_curated_or_rejected(batch in arb_batch()) {
        let report = pipeline().run(&batch).unwrap();
        let s = &report.curation_stats;
        prop_assert!(s.is_conserved());
        prop_assert_eq!(s.total_processed, batch.len());
        prop_assert_eq!(s.final_curated, report.cards.len());
        prop_assert_eq!(report.cards.len() + report.rejections.len(), batch.len());
    }

    #[test]
    fn curated_cards_respect_card_invariants(batch in arb_batch()) {
        let config = WanderConfig::default();
        let report = pipeline().run(&batch).unwrap();
        for card in &report.cards {
            prop_assert!(card.tags.len() <= 3);
            prop_assert!(card.score.total >= 0.0);
            prop_assert!(card.score.total >= config.scoring.min_score);
            prop_assert!(card.photos.len() >= config.gates.min_photos);
            prop_assert_ne!(card.chain_code.as_deref(), Some("S8"));
        }
    }
}

// ── Order independence ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn input_order_does_not_change_the_curated_set(batch in arb_batch()) {
        let p = pipeline();
        let forward = p.run(&batch).unwrap();
        let mut reversed_batch = batch.clone();
        reversed_batch.reverse();
        let reversed = p.run(&reversed_batch).unwrap();

        let mut a: Vec<String> = forward.cards.iter().map(|c| c.hotel_id.clone()).collect();
        let mut b: Vec<String> = reversed.cards.iter().map(|c| c.hotel_id.clone()).collect();
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
        prop_assert_eq!(forward.curation_stats.passed_price_gate, reversed.curation_stats.passed_price_gate);
    }

    #[test]
    fn parallel_run_is_deterministic(batch in arb_batch()) {
        let seq = pipeline().run(&batch).unwrap();
        let par = pipeline().with_parallelism(true).run(&batch).unwrap();
        prop_assert_eq!(seq.cards, par.cards);
        prop_assert_eq!(seq.rejections, par.rejections);
    }
}
