use proptest::prelude::*;
use test_fixtures::card;
use wander_core::config::{DiversityConfig, DiversityPolicy};
use wander_core::models::CuratedCard;
use wander_diversity::{compute_stats, DiversityEngine};

const CITIES: &[&str] = &["Paris", "Rome", "Lisbon", "Kyoto", "Bali"];
const BRANDS: &[&str] = &["RZ", "FS", "MO"];
const FEW_CITIES: &[&str] = &["Paris", "Rome", "Lisbon"];
const FEW_BRANDS: &[&str] = &["RZ", "FS"];

fn arb_cards() -> impl Strategy<Value = Vec<CuratedCard>> {
    prop::collection::vec(
        (
            prop::sample::select(CITIES),
            prop::option::of(prop::sample::select(BRANDS)),
            0.0f64..1.0,
        ),
        0..30,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (city, brand, score))| card(&format!("c{i}"), city, brand, score))
            .collect()
    })
}

fn arb_policy() -> impl Strategy<Value = DiversityPolicy> {
    prop_oneof![Just(DiversityPolicy::Basic), Just(DiversityPolicy::Tiered)]
}

fn sorted_ids(cards: &[CuratedCard]) -> Vec<String> {
    let mut ids: Vec<String> = cards.iter().map(|c| c.hotel_id.clone()).collect();
    ids.sort();
    ids
}

fn basic() -> DiversityEngine {
    DiversityEngine::new(DiversityConfig::default())
}

// ── Permutation ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn diversify_is_a_permutation(cards in arb_cards(), policy in arb_policy()) {
        let engine = DiversityEngine::new(DiversityConfig { policy, ..Default::default() });
        let out = engine.diversify(cards.clone());
        prop_assert_eq!(out.len(), cards.len());
        prop_assert_eq!(sorted_ids(&out), sorted_ids(&cards));
    }

    #[test]
    fn diversify_is_deterministic(cards in arb_cards(), policy in arb_policy()) {
        let engine = DiversityEngine::new(DiversityConfig { policy, ..Default::default() });
        prop_assert_eq!(engine.diversify(cards.clone()), engine.diversify(cards));
    }
}

// ── Run limit ────────────────────────────────────────────────────────────

proptest! {
    /// A skewed city mix stays feasible while the largest city has at most
    /// 2 × (others + 1) cards.
    #[test]
    fn city_runs_capped_when_feasible(others in 1usize..10, extra in 0usize..30) {
        let paris = extra.min(2 * (others + 1));
        let mut cards = Vec::new();
        for i in 0..paris {
            cards.push(card(&format!("p{i}"), "Paris", None, 0.9 - i as f64 * 0.01));
        }
        for i in 0..others {
            let city = CITIES[1 + i % (CITIES.len() - 1)];
            cards.push(card(&format!("o{i}"), city, None, 0.5));
        }
        let out = basic().diversify(cards);
        prop_assert!(compute_stats(&out).max_city_run <= 2);
    }

    /// Same for brands, with every card in its own city.
    #[test]
    fn brand_runs_capped_when_feasible(others in 1usize..10, extra in 0usize..30) {
        let rz = extra.min(2 * (others + 1));
        let mut cards = Vec::new();
        for i in 0..rz {
            cards.push(card(&format!("r{i}"), &format!("City {i}"), Some("RZ"), 0.9));
        }
        for i in 0..others {
            let brand = if i % 2 == 0 { Some("FS") } else { None };
            cards.push(card(&format!("o{i}"), &format!("Town {i}"), brand, 0.8));
        }
        let out = basic().diversify(cards);
        let stats = compute_stats(&out);
        prop_assert!(stats.max_brand_run <= 2);
        prop_assert_eq!(stats.max_city_run, 1);
    }
}

// ── Against exhaustive search ────────────────────────────────────────────

/// Few cities and brands over at most eight cards, so city and brand
/// collisions overlap.
fn arb_crowded_cards() -> impl Strategy<Value = Vec<CuratedCard>> {
    prop::collection::vec(
        (
            prop::sample::select(FEW_CITIES),
            prop::option::of(prop::sample::select(FEW_BRANDS)),
            0.0f64..1.0,
        ),
        1..=8,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (city, brand, score))| card(&format!("c{i}"), city, brand, score))
            .collect()
    })
}

type Run<'a> = Option<(&'a str, usize)>;

fn extend<'a>(run: Run<'a>, key: Option<&'a str>) -> Run<'a> {
    match (run, key) {
        (Some((last, n)), Some(key)) if last == key => Some((key, n + 1)),
        (_, Some(key)) => Some((key, 1)),
        (_, None) => None,
    }
}

/// Depth-first search over every ordering of `left`.
fn orderable<'a>(
    left: &mut Vec<(&'a str, Option<&'a str>)>,
    city: Run<'a>,
    brand: Run<'a>,
) -> bool {
    if left.is_empty() {
        return true;
    }
    for i in 0..left.len() {
        let (c, b) = left[i];
        let next_city = extend(city, Some(c));
        let next_brand = extend(brand, b);
        if next_city.map_or(0, |r| r.1) > 2 || next_brand.map_or(0, |r| r.1) > 2 {
            continue;
        }
        left.remove(i);
        let found = orderable(left, next_city, next_brand);
        left.insert(i, (c, b));
        if found {
            return true;
        }
    }
    false
}

proptest! {
    #[test]
    fn runs_capped_whenever_some_order_allows(cards in arb_crowded_cards()) {
        let mut keys: Vec<(&str, Option<&str>)> = cards
            .iter()
            .map(|c| (c.city.as_str(), c.chain_code.as_deref()))
            .collect();
        let feasible = orderable(&mut keys, None, None);

        let out = basic().diversify(cards.clone());
        prop_assert_eq!(sorted_ids(&out), sorted_ids(&cards));
        if feasible {
            let stats = compute_stats(&out);
            prop_assert!(stats.max_city_run <= 2, "city run {}", stats.max_city_run);
            prop_assert!(stats.max_brand_run <= 2, "brand run {}", stats.max_brand_run);
        }
    }
}
