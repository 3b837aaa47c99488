//! Fixed-order gate evaluator.

use smallvec::SmallVec;

use crate::gates::{BrandGate, PhotoGate, PriceGate, QualityGate};
use crate::types::*;

/// Runs gates in a fixed order: photo, brand, quality, price.
///
/// Order only matters for funnel statistics; the pass/fail outcome of a hotel
/// is the conjunction of every gate either way.
pub struct GateEvaluator {
    gates: Vec<Box<dyn HotelGate>>,
}

impl GateEvaluator {
    /// Create an evaluator with the four default gates.
    pub fn new() -> Self {
        let gates: Vec<Box<dyn HotelGate>> = vec![
            Box::new(PhotoGate),
            Box::new(BrandGate),
            Box::new(QualityGate),
            Box::new(PriceGate),
        ];
        Self { gates }
    }

    /// Create an evaluator with custom gates, run in the given order.
    pub fn with_gates(gates: Vec<Box<dyn HotelGate>>) -> Self {
        Self { gates }
    }

    pub fn gates(&self) -> &[Box<dyn HotelGate>] {
        &self.gates
    }

    /// Evaluate gates in order, stopping at the first failure.
    pub fn evaluate(&self, input: &GateInput<'_>) -> GateVerdict {
        let mut passed = SmallVec::new();
        for gate in &self.gates {
            let result = gate.evaluate(input);
            if !result.passed {
                tracing::trace!(
                    hotel_id = %input.hotel.id(),
                    gate = %result.gate_id,
                    summary = %result.summary,
                    "gate failed"
                );
                return GateVerdict {
                    passed,
                    failure: Some(result),
                };
            }
            passed.push(result.gate_id);
        }
        GateVerdict {
            passed,
            failure: None,
        }
    }

    /// Evaluate every gate without short-circuiting, for diagnostics.
    pub fn evaluate_all(&self, input: &GateInput<'_>) -> Vec<GateResult> {
        self.gates.iter().map(|g| g.evaluate(input)).collect()
    }
}

impl Default for GateEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
