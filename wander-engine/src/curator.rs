//! The curation orchestrator: gates, score, threshold, card.

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use wander_core::config::WanderConfig;
use wander_core::models::{CuratedCard, CurationStats, RawHotel, Rejection, RejectionReason};
use wander_core::traits::SignalClassifier;
use wander_gates::{GateEvaluator, GateInput};
use wander_scoring::ScoringEngine;
use wander_signals::SignalExtractor;

use crate::card;

/// Everything one curation run produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurationOutcome {
    /// Surviving cards, highest score first (stable on input order).
    pub cards: Vec<CuratedCard>,
    pub stats: CurationStats,
    /// Every discarded hotel with the reason, in input order.
    pub rejections: Vec<Rejection>,
}

impl CurationOutcome {
    /// Concatenate two outcomes from adjacent slices of a batch.
    fn merge(mut self, other: CurationOutcome) -> CurationOutcome {
        self.cards.extend(other.cards);
        self.rejections.extend(other.rejections);
        self.stats = self.stats.merge(other.stats);
        self
    }

    fn finish(mut self) -> CurationOutcome {
        self.cards.sort_by(|a, b| b.score.total.total_cmp(&a.score.total));
        self
    }
}

/// Runs every hotel of a batch through extraction, the four gates, scoring
/// and the score threshold.
///
/// Hotels are independent of each other: the only shared state is the
/// read-only rule tables, so a batch can be processed in parallel.
pub struct Curator {
    config: Arc<WanderConfig>,
    extractor: SignalExtractor,
    gates: GateEvaluator,
    scorer: ScoringEngine,
}

impl Curator {
    pub fn new(config: Arc<WanderConfig>) -> Self {
        Self {
            extractor: SignalExtractor::new(config.clone()),
            gates: GateEvaluator::new(),
            scorer: ScoringEngine::new(config.clone()),
            config,
        }
    }

    /// Create a curator with a custom text classifier.
    pub fn with_classifier(config: Arc<WanderConfig>, classifier: Box<dyn SignalClassifier>) -> Self {
        Self {
            extractor: SignalExtractor::with_classifier(config.clone(), classifier),
            gates: GateEvaluator::new(),
            scorer: ScoringEngine::new(config.clone()),
            config,
        }
    }

    pub fn config(&self) -> &WanderConfig {
        &self.config
    }

    /// Curate a batch sequentially.
    pub fn curate(&self, hotels: &[RawHotel]) -> CurationOutcome {
        let refs: Vec<&RawHotel> = hotels.iter().collect();
        self.curate_refs(&refs)
    }

    /// Curate a batch on the rayon pool. Produces the same cards, in the same
    /// order, with the same counters as [`Curator::curate`].
    pub fn curate_parallel(&self, hotels: &[RawHotel]) -> CurationOutcome {
        let refs: Vec<&RawHotel> = hotels.iter().collect();
        self.curate_refs_parallel(&refs)
    }

    pub(crate) fn curate_refs(&self, hotels: &[&RawHotel]) -> CurationOutcome {
        let _span = wander_core::curation_span!(hotels.len()).entered();
        let mut outcome = CurationOutcome::default();
        for hotel in hotels {
            self.process(hotel, &mut outcome);
        }
        log_funnel(outcome.finish())
    }

    pub(crate) fn curate_refs_parallel(&self, hotels: &[&RawHotel]) -> CurationOutcome {
        let _span = wander_core::curation_span!(hotels.len()).entered();
        let outcome = hotels
            .par_iter()
            .fold(CurationOutcome::default, |mut acc, hotel| {
                self.process(hotel, &mut acc);
                acc
            })
            .reduce(CurationOutcome::default, CurationOutcome::merge);
        log_funnel(outcome.finish())
    }

    /// Gate, score and card one hotel into `acc`.
    fn process(&self, hotel: &RawHotel, acc: &mut CurationOutcome) {
        acc.stats.record_processed();

        let signals = self.extractor.extract_hotel(hotel);
        let verdict = self
            .gates
            .evaluate(&GateInput::new(hotel, &signals, &self.config));
        for gate in &verdict.passed {
            acc.stats.record_passed(*gate);
        }
        if let Some(failure) = verdict.failure {
            tracing::debug!(
                hotel_id = %hotel.id(),
                gate = %failure.gate_id,
                reason = %failure.summary,
                "hotel rejected"
            );
            acc.rejections.push(Rejection {
                hotel_id: hotel.id().to_string(),
                reason: RejectionReason::Gate {
                    gate: failure.gate_id,
                },
            });
            return;
        }

        let score = self.scorer.score(hotel, &signals);
        if !self.scorer.passes_threshold(&score) {
            tracing::debug!(
                hotel_id = %hotel.id(),
                score = score.total,
                threshold = self.scorer.min_score(),
                "hotel below score threshold"
            );
            acc.rejections.push(Rejection {
                hotel_id: hotel.id().to_string(),
                reason: RejectionReason::BelowThreshold {
                    score: score.total,
                    threshold: self.scorer.min_score(),
                },
            });
            return;
        }
        acc.stats.record_above_threshold();

        acc.stats.record_curated(score.total);
        acc.cards.push(card::build_card(hotel, &signals, score));
    }
}

fn log_funnel(outcome: CurationOutcome) -> CurationOutcome {
    let s = &outcome.stats;
    tracing::info!(
        processed = s.total_processed,
        photo = s.passed_photo_gate,
        brand = s.passed_brand_gate,
        quality = s.passed_quality_gate,
        price = s.passed_price_gate,
        threshold = s.passed_score_threshold,
        curated = s.final_curated,
        average_score = s.average_score,
        "curation complete"
    );
    outcome
}
