//! # wander-gates
//!
//! Hard eligibility gates. A hotel must pass all four (photo, brand, quality,
//! price) before it is scored. Failing a gate is an expected outcome, reported
//! as a [`GateResult`], never an error.

pub mod evaluator;
pub mod gates;
pub mod types;

pub use evaluator::GateEvaluator;
pub use gates::{BrandGate, PhotoGate, PriceGate, QualityGate};
pub use types::{GateInput, GateResult, GateVerdict, HotelGate};
