//! Error handling for Wander.
//! One error enum per concern, `thiserror` only.
//!
//! Business outcomes (a gate failing, a score below threshold) are not errors;
//! they surface as rejections and funnel counters.

pub mod config_error;
pub mod input_error;
pub mod wander_error;

pub use config_error::ConfigError;
pub use input_error::InputError;
pub use wander_error::{WanderError, WanderResult};
