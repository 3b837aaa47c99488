use super::{ConfigError, InputError};

/// Top-level error aggregating every Wander error type.
#[derive(Debug, thiserror::Error)]
pub enum WanderError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error("batch rejected: {count} structurally invalid records (first: {first})")]
    InvalidBatch { count: usize, first: InputError },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the workspace.
pub type WanderResult<T> = Result<T, WanderError>;
