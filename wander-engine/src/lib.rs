//! # wander-engine
//!
//! Curation orchestrator and the end-to-end pipeline.
//!
//! [`Curator`] runs extraction, gates, scoring and the score threshold over a
//! batch, producing cards, funnel statistics and a rejection ledger.
//! [`CurationPipeline`] adds input validation and diversification and returns
//! the [`FeedReport`] handed to the consuming feed.

pub mod card;
pub mod curator;
pub mod pipeline;
pub mod summary;
pub mod validation;

pub use curator::{CurationOutcome, Curator};
pub use pipeline::{CurationPipeline, FeedReport, LenientRun};
pub use validation::validate_batch;
