//! Run statistics: the curation funnel, rejections, and feed diversity.

use serde::{Deserialize, Serialize};

use super::gate::GateId;

/// Funnel counters for one curation run.
///
/// Counts are cumulative: a hotel counted in `passed_brand_gate` was already
/// counted in `passed_photo_gate`, and so on down the funnel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurationStats {
    pub total_processed: usize,
    pub passed_photo_gate: usize,
    pub passed_brand_gate: usize,
    pub passed_quality_gate: usize,
    pub passed_price_gate: usize,
    pub passed_score_threshold: usize,
    pub final_curated: usize,
    /// Mean total score over curated cards; 0.0 when none survive.
    pub average_score: f64,
    #[serde(skip)]
    score_sum: f64,
}

impl CurationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_processed(&mut self) {
        self.total_processed += 1;
    }

    pub fn record_passed(&mut self, gate: GateId) {
        match gate {
            GateId::Photo => self.passed_photo_gate += 1,
            GateId::Brand => self.passed_brand_gate += 1,
            GateId::Quality => self.passed_quality_gate += 1,
            GateId::Price => self.passed_price_gate += 1,
        }
    }

    pub fn record_above_threshold(&mut self) {
        self.passed_score_threshold += 1;
    }

    pub fn record_curated(&mut self, total_score: f64) {
        self.final_curated += 1;
        self.score_sum += total_score;
        self.refresh_average();
    }

    /// Counter for a given gate.
    pub fn passed(&self, gate: GateId) -> usize {
        match gate {
            GateId::Photo => self.passed_photo_gate,
            GateId::Brand => self.passed_brand_gate,
            GateId::Quality => self.passed_quality_gate,
            GateId::Price => self.passed_price_gate,
        }
    }

    /// Combine counters from two disjoint partitions of a batch.
    pub fn merge(mut self, other: CurationStats) -> CurationStats {
        self.total_processed += other.total_processed;
        self.passed_photo_gate += other.passed_photo_gate;
        self.passed_brand_gate += other.passed_brand_gate;
        self.passed_quality_gate += other.passed_quality_gate;
        self.passed_price_gate += other.passed_price_gate;
        self.passed_score_threshold += other.passed_score_threshold;
        self.final_curated += other.final_curated;
        self.score_sum += other.score_sum;
        self.refresh_average();
        self
    }

    /// True when every funnel stage is no larger than the one before it.
    pub fn is_conserved(&self) -> bool {
        self.final_curated <= self.passed_score_threshold
            && self.passed_score_threshold <= self.passed_price_gate
            && self.passed_price_gate <= self.passed_quality_gate
            && self.passed_quality_gate <= self.passed_brand_gate
            && self.passed_brand_gate <= self.passed_photo_gate
            && self.passed_photo_gate <= self.total_processed
    }

    fn refresh_average(&mut self) {
        self.average_score = if self.final_curated == 0 {
            0.0
        } else {
            self.score_sum / self.final_curated as f64
        };
    }
}

/// Why a hotel was discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    /// Failed a hard gate; later gates were not evaluated.
    Gate { gate: GateId },
    /// Passed every gate but scored below the configured minimum.
    BelowThreshold { score: f64, threshold: f64 },
}

/// One discarded hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    pub hotel_id: String,
    pub reason: RejectionReason,
}

/// Repetition statistics for an ordered card list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiversityStats {
    pub unique_cities: usize,
    pub unique_brands: usize,
    pub max_city_run: usize,
    pub max_brand_run: usize,
    /// Normalized [0.0, 1.0]; higher means less repetition.
    pub diversity_score: f64,
}
