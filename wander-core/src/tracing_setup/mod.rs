//! Observability for Wander.
//! `tracing` crate with `EnvFilter`, per-stage spans.

pub mod setup;
pub mod spans;

pub use setup::{init_tracing, init_tracing_json};
