use wander_core::config::{DiversityConfig, DiversityPolicy};
use wander_core::models::{CuratedCard, DiversityStats};

use crate::{bucket, stats, tiered};

/// Applies the configured diversification policy.
pub struct DiversityEngine {
    config: DiversityConfig,
}

impl DiversityEngine {
    pub fn new(config: DiversityConfig) -> Self {
        Self { config }
    }

    pub fn policy(&self) -> DiversityPolicy {
        self.config.policy
    }

    /// Reorder cards. The result is always a permutation of the input.
    pub fn diversify(&self, cards: Vec<CuratedCard>) -> Vec<CuratedCard> {
        let _span = wander_core::diversity_span!(cards.len(), self.config.policy).entered();
        let max_run = self.config.max_consecutive;

        let ordered = match self.config.policy {
            DiversityPolicy::Basic => bucket::diversify(cards, max_run),
            DiversityPolicy::Tiered => {
                tiered::diversify_tiered(cards, max_run, &self.config.tier_cutoffs)
            }
        };

        let stats = stats::compute_stats(&ordered);
        if stats.max_city_run > max_run || stats.max_brand_run > max_run {
            tracing::debug!(
                max_city_run = stats.max_city_run,
                max_brand_run = stats.max_brand_run,
                max_run,
                "run limit not satisfiable for this input"
            );
        }
        ordered
    }

    pub fn stats(&self, cards: &[CuratedCard]) -> DiversityStats {
        stats::compute_stats(cards)
    }
}

impl Default for DiversityEngine {
    fn default() -> Self {
        Self::new(DiversityConfig::default())
    }
}
