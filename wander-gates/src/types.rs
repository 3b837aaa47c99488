//! Core types for hotel gates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use wander_core::config::WanderConfig;
use wander_core::models::{GateId, HotelSignals, RawHotel};

/// Result produced by each gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateResult {
    pub gate_id: GateId,
    pub passed: bool,
    pub summary: String,
}

impl GateResult {
    pub fn pass(gate_id: GateId, summary: impl Into<String>) -> Self {
        Self {
            gate_id,
            passed: true,
            summary: summary.into(),
        }
    }

    pub fn fail(gate_id: GateId, summary: impl Into<String>) -> Self {
        Self {
            gate_id,
            passed: false,
            summary: summary.into(),
        }
    }
}

/// Input provided to each gate by the evaluator.
#[derive(Debug, Clone, Copy)]
pub struct GateInput<'a> {
    pub hotel: &'a RawHotel,
    pub signals: &'a HotelSignals,
    pub config: &'a WanderConfig,
}

impl<'a> GateInput<'a> {
    pub fn new(hotel: &'a RawHotel, signals: &'a HotelSignals, config: &'a WanderConfig) -> Self {
        Self {
            hotel,
            signals,
            config,
        }
    }
}

/// Short-circuit evaluation outcome for one hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct GateVerdict {
    /// Gates passed before the first failure, in evaluation order.
    pub passed: SmallVec<[GateId; 4]>,
    /// The first failing gate; `None` when every gate passed.
    pub failure: Option<GateResult>,
}

impl GateVerdict {
    pub fn is_pass(&self) -> bool {
        self.failure.is_none()
    }

    pub fn failed_gate(&self) -> Option<GateId> {
        self.failure.as_ref().map(|f| f.gate_id)
    }
}

/// Trait that all hotel gates implement.
pub trait HotelGate: Send + Sync {
    /// Unique gate identifier.
    fn id(&self) -> GateId;

    /// Human-readable gate name.
    fn name(&self) -> &'static str;

    /// Gate description.
    fn description(&self) -> &'static str;

    /// Evaluate the gate for one hotel.
    fn evaluate(&self, input: &GateInput<'_>) -> GateResult;
}
