//! Span definitions per pipeline stage.

/// Create a curation span.
#[macro_export]
macro_rules! curation_span {
    ($candidate_count:expr) => {
        tracing::info_span!("wander.curation", candidates = $candidate_count)
    };
}

/// Create a diversity span.
#[macro_export]
macro_rules! diversity_span {
    ($card_count:expr, $policy:expr) => {
        tracing::info_span!("wander.diversity", cards = $card_count, policy = ?$policy)
    };
}

/// Create a pipeline span covering validation, curation, and diversification.
#[macro_export]
macro_rules! pipeline_span {
    ($batch_size:expr) => {
        tracing::info_span!("wander.pipeline", batch_size = $batch_size)
    };
}
