use test_fixtures::card;
use wander_core::config::{DiversityConfig, DiversityPolicy};
use wander_core::models::CuratedCard;
use wander_diversity::{compute_stats, DiversityEngine};

fn ids(cards: &[CuratedCard]) -> Vec<&str> {
    cards.iter().map(|c| c.hotel_id.as_str()).collect()
}

fn engine(policy: DiversityPolicy) -> DiversityEngine {
    DiversityEngine::new(DiversityConfig {
        policy,
        ..Default::default()
    })
}

// ── Basic bucket shuffle ─────────────────────────────────────────────────

#[test]
fn third_paris_card_waits_for_another_city() {
    let cards = vec![
        card("p1", "Paris", Some("RZ"), 0.9),
        card("p2", "Paris", Some("FS"), 0.8),
        card("p3", "Paris", Some("MO"), 0.7),
        card("r1", "Rome", Some("SL"), 0.5),
    ];
    let out = engine(DiversityPolicy::Basic).diversify(cards);
    assert_eq!(ids(&out), vec!["p1", "p2", "r1", "p3"]);
    assert_eq!(compute_stats(&out).max_city_run, 2);
}

#[test]
fn all_same_city_is_best_effort() {
    let cards = vec![
        card("p1", "Paris", Some("RZ"), 0.9),
        card("p2", "Paris", Some("FS"), 0.8),
        card("p3", "Paris", Some("MO"), 0.7),
    ];
    let out = engine(DiversityPolicy::Basic).diversify(cards);
    assert_eq!(ids(&out), vec!["p1", "p2", "p3"]);
}

#[test]
fn brand_runs_are_broken_too() {
    let cards = vec![
        card("a", "Paris", Some("RZ"), 0.9),
        card("b", "Rome", Some("RZ"), 0.8),
        card("c", "Lisbon", Some("RZ"), 0.7),
        card("d", "Kyoto", Some("FS"), 0.6),
    ];
    let out = engine(DiversityPolicy::Basic).diversify(cards);
    let stats = compute_stats(&out);
    assert!(stats.max_brand_run <= 2);
    assert_eq!(stats.max_city_run, 1);
    assert_eq!(out.len(), 4);
}

#[test]
fn brandless_cards_never_form_brand_runs() {
    let cards = vec![
        card("a", "Paris", None, 0.9),
        card("b", "Rome", None, 0.8),
        card("c", "Lisbon", None, 0.7),
    ];
    let out = engine(DiversityPolicy::Basic).diversify(cards);
    assert_eq!(ids(&out), vec!["a", "b", "c"]);
    let stats = compute_stats(&out);
    assert_eq!(stats.max_brand_run, 0);
    assert_eq!(stats.unique_brands, 0);
}

#[test]
fn city_keys_ignore_case_and_padding() {
    let cards = vec![
        card("a", "Paris", None, 0.9),
        card("b", " paris", None, 0.8),
        card("c", "PARIS ", None, 0.7),
        card("d", "Rome", None, 0.6),
    ];
    let out = engine(DiversityPolicy::Basic).diversify(cards);
    assert_eq!(ids(&out), vec!["a", "b", "d", "c"]);
}

#[test]
fn same_input_same_output() {
    let cards = vec![
        card("a", "Paris", Some("RZ"), 0.7),
        card("b", "Paris", Some("RZ"), 0.7),
        card("c", "Rome", Some("RZ"), 0.7),
        card("d", "Paris", None, 0.7),
        card("e", "Rome", None, 0.7),
    ];
    let e = engine(DiversityPolicy::Basic);
    assert_eq!(e.diversify(cards.clone()), e.diversify(cards));
}

// ── Tiered shuffle ───────────────────────────────────────────────────────

#[test]
fn tiers_stay_in_score_order() {
    let cards = vec![
        card("low-paris", "Paris", None, 0.40),
        card("top-rome", "Rome", None, 0.70),
        card("mid-paris", "Paris", None, 0.50),
        card("top-paris", "Paris", None, 0.65),
    ];
    let out = engine(DiversityPolicy::Tiered).diversify(cards);
    assert_eq!(ids(&out), vec!["top-rome", "top-paris", "mid-paris", "low-paris"]);
}

#[test]
fn basic_policy_may_cross_tiers_where_tiered_does_not() {
    let cards = vec![
        card("t1", "Paris", None, 0.9),
        card("t2", "Paris", None, 0.8),
        card("t3", "Paris", None, 0.7),
        card("low", "Rome", None, 0.3),
    ];
    let basic = engine(DiversityPolicy::Basic).diversify(cards.clone());
    assert_eq!(ids(&basic), vec!["t1", "t2", "low", "t3"]);

    // All Paris cards share the top tier, so the tiered order cannot borrow
    // the low Rome card to break the run.
    let tiered = engine(DiversityPolicy::Tiered).diversify(cards);
    assert_eq!(ids(&tiered), vec!["t1", "t2", "t3", "low"]);
}

#[test]
fn runs_do_not_continue_across_tier_boundaries() {
    let cards = vec![
        card("t1", "Paris", None, 0.9),
        card("t2", "Paris", None, 0.8),
        card("m1", "Paris", None, 0.5),
        card("m2", "Rome", None, 0.5),
    ];
    let out = engine(DiversityPolicy::Tiered).diversify(cards);
    assert_eq!(ids(&out), vec!["t1", "t2", "m2", "m1"]);
}

// ── Statistics ───────────────────────────────────────────────────────────

#[test]
fn stats_measure_the_given_order() {
    let cards = vec![
        card("a", "Paris", Some("RZ"), 0.9),
        card("b", "Paris", Some("RZ"), 0.8),
        card("c", "Paris", Some("FS"), 0.7),
        card("d", "Rome", None, 0.6),
    ];
    let stats = compute_stats(&cards);
    assert_eq!(stats.unique_cities, 2);
    assert_eq!(stats.unique_brands, 2);
    assert_eq!(stats.max_city_run, 3);
    assert_eq!(stats.max_brand_run, 2);
}

#[test]
fn diversity_score_rewards_variety() {
    let varied = vec![
        card("a", "Paris", Some("RZ"), 0.9),
        card("b", "Rome", Some("FS"), 0.8),
        card("c", "Lisbon", Some("MO"), 0.7),
    ];
    let repetitive = vec![
        card("a", "Paris", Some("RZ"), 0.9),
        card("b", "Paris", Some("RZ"), 0.8),
        card("c", "Paris", Some("RZ"), 0.7),
    ];
    let high = compute_stats(&varied).diversity_score;
    let low = compute_stats(&repetitive).diversity_score;
    assert!((high - 1.0).abs() < 1e-9);
    assert!(low < high);
    assert!(low > 0.0);
}

#[test]
fn empty_feed_has_zero_stats() {
    let stats = compute_stats(&[]);
    assert_eq!(stats.unique_cities, 0);
    assert_eq!(stats.diversity_score, 0.0);
}
