//! Repetition statistics over a final card order.

use rustc_hash::FxHashSet;
use wander_core::models::{CuratedCard, DiversityStats};

const CITY_RATIO_WEIGHT: f64 = 0.3;
const BRAND_RATIO_WEIGHT: f64 = 0.2;
const CITY_RUN_WEIGHT: f64 = 0.3;
const BRAND_RUN_WEIGHT: f64 = 0.2;

/// Measure how much a card order repeats itself.
///
/// Runs are measured on the order as given, independent of which policy
/// produced it. Brandless cards break brand runs and are not counted as a brand.
pub fn compute_stats(cards: &[CuratedCard]) -> DiversityStats {
    let mut cities: FxHashSet<String> = FxHashSet::default();
    let mut brands: FxHashSet<String> = FxHashSet::default();
    let mut branded = 0usize;

    let mut max_city_run = 0usize;
    let mut max_brand_run = 0usize;
    let mut city_run: Option<(String, usize)> = None;
    let mut brand_run: Option<(String, usize)> = None;

    for card in cards {
        let city = card.city_key();
        let run = extend(&mut city_run, Some(city.clone()));
        max_city_run = max_city_run.max(run);
        cities.insert(city);

        let brand = card.brand_key();
        if let Some(b) = &brand {
            branded += 1;
            brands.insert(b.clone());
        }
        let run = extend(&mut brand_run, brand);
        max_brand_run = max_brand_run.max(run);
    }

    let mut stats = DiversityStats {
        unique_cities: cities.len(),
        unique_brands: brands.len(),
        max_city_run,
        max_brand_run,
        diversity_score: 0.0,
    };
    stats.diversity_score = diversity_score(&stats, cards.len(), branded);
    stats
}

/// Normalized [0.0, 1.0] score:
///
/// ```text
/// 0.3 × unique_cities / n
/// + 0.2 × unique_brands / branded     (1.0 when nothing is branded)
/// + 0.3 / max(max_city_run, 1)
/// + 0.2 / max(max_brand_run, 1)
/// ```
///
/// Increases with uniqueness, decreases with run length. Empty feeds score 0.
pub fn diversity_score(stats: &DiversityStats, total: usize, branded: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let city_ratio = stats.unique_cities as f64 / total as f64;
    let brand_ratio = if branded == 0 {
        1.0
    } else {
        stats.unique_brands as f64 / branded as f64
    };
    let score = CITY_RATIO_WEIGHT * city_ratio
        + BRAND_RATIO_WEIGHT * brand_ratio
        + CITY_RUN_WEIGHT / stats.max_city_run.max(1) as f64
        + BRAND_RUN_WEIGHT / stats.max_brand_run.max(1) as f64;
    score.clamp(0.0, 1.0)
}

/// Advance a run with the next key and return its new length (0 for no key).
fn extend(run: &mut Option<(String, usize)>, key: Option<String>) -> usize {
    *run = match (run.take(), key) {
        (Some((last, n)), Some(key)) if last == key => Some((last, n + 1)),
        (_, Some(key)) => Some((key, 1)),
        (_, None) => None,
    };
    run.as_ref().map_or(0, |(_, n)| *n)
}
