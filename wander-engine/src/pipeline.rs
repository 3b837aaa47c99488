//! End-to-end pipeline: validate, curate, diversify, report.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use wander_core::config::WanderConfig;
use wander_core::errors::{InputError, WanderError, WanderResult};
use wander_core::models::{CuratedCard, CurationStats, DiversityStats, RawHotel, Rejection};
use wander_diversity::DiversityEngine;

use crate::curator::{CurationOutcome, Curator};
use crate::summary;
use crate::validation::validate_batch;

/// The pipeline's output, handed to the consuming feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedReport {
    /// Canonical presentation order.
    pub cards: Vec<CuratedCard>,
    pub curation_stats: CurationStats,
    pub diversity_stats: DiversityStats,
    /// Log line only.
    pub summary: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejections: Vec<Rejection>,
}

impl FeedReport {
    pub fn to_json(&self) -> WanderResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Result of [`CurationPipeline::run_lenient`]: the report over the valid
/// records plus the records that were dropped.
#[derive(Debug, Clone)]
pub struct LenientRun {
    pub report: FeedReport,
    pub invalid: Vec<InputError>,
}

/// Validation, curation and diversification over one batch.
///
/// Holds only read-only state; one instance can serve concurrent runs.
pub struct CurationPipeline {
    curator: Curator,
    diversity: DiversityEngine,
    parallel: bool,
}

impl CurationPipeline {
    pub fn new(config: Arc<WanderConfig>) -> Self {
        let diversity = DiversityEngine::new(config.diversity.clone());
        Self {
            curator: Curator::new(config),
            diversity,
            parallel: false,
        }
    }

    /// Build from `wander.toml` (or defaults) with `WANDER_*` overrides.
    pub fn from_config_file(path: Option<&Path>) -> WanderResult<Self> {
        let config = WanderConfig::load(path)?;
        Ok(Self::new(Arc::new(config)))
    }

    /// Curate on the rayon pool instead of the calling thread.
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn curator(&self) -> &Curator {
        &self.curator
    }

    /// Run a batch. Any structurally invalid record rejects the whole batch.
    pub fn run(&self, hotels: &[RawHotel]) -> WanderResult<FeedReport> {
        let _span = wander_core::pipeline_span!(hotels.len()).entered();

        let mut invalid = validate_batch(hotels);
        if !invalid.is_empty() {
            let count = invalid.len();
            let first = invalid.swap_remove(0);
            tracing::warn!(count, first = %first, "batch rejected");
            return Err(WanderError::InvalidBatch { count, first });
        }

        let refs: Vec<&RawHotel> = hotels.iter().collect();
        Ok(self.curate_and_diversify(&refs))
    }

    /// Run a batch, dropping structurally invalid records instead of failing.
    pub fn run_lenient(&self, hotels: &[RawHotel]) -> LenientRun {
        let _span = wander_core::pipeline_span!(hotels.len()).entered();

        let invalid = validate_batch(hotels);
        for error in &invalid {
            tracing::warn!(error = %error, "dropping invalid record");
        }

        let refs: Vec<&RawHotel> = hotels
            .iter()
            .enumerate()
            .filter(|(i, _)| !invalid.iter().any(|e| e.index() == *i))
            .map(|(_, h)| h)
            .collect();

        LenientRun {
            report: self.curate_and_diversify(&refs),
            invalid,
        }
    }

    /// Parse a JSON array of raw hotels and run it.
    pub fn run_json(&self, json: &str) -> WanderResult<FeedReport> {
        let hotels: Vec<RawHotel> = serde_json::from_str(json)?;
        self.run(&hotels)
    }

    fn curate_and_diversify(&self, hotels: &[&RawHotel]) -> FeedReport {
        let CurationOutcome {
            cards,
            stats,
            rejections,
        } = if self.parallel {
            self.curator.curate_refs_parallel(hotels)
        } else {
            self.curator.curate_refs(hotels)
        };

        let cards = self.diversity.diversify(cards);
        let diversity_stats = self.diversity.stats(&cards);
        let summary = summary::summarize(&stats, &diversity_stats);
        tracing::info!(summary = %summary, "feed ready");

        FeedReport {
            cards,
            curation_stats: stats,
            diversity_stats,
            summary,
            rejections,
        }
    }
}
