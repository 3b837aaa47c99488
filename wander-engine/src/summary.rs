//! Human-readable run summary. For logs only; never parse it.

use wander_core::models::{CurationStats, DiversityStats};

pub fn summarize(curation: &CurationStats, diversity: &DiversityStats) -> String {
    format!(
        "curated {} of {} hotels (photo {}, brand {}, quality {}, price {}, score {}); \
         average score {:.2}; {} cities, {} brands, longest city run {}, \
         longest brand run {}, diversity {:.2}",
        curation.final_curated,
        curation.total_processed,
        curation.passed_photo_gate,
        curation.passed_brand_gate,
        curation.passed_quality_gate,
        curation.passed_price_gate,
        curation.passed_score_threshold,
        curation.average_score,
        diversity.unique_cities,
        diversity.unique_brands,
        diversity.max_city_run,
        diversity.max_brand_run,
        diversity.diversity_score,
    )
}
