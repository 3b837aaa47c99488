//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{LOG_ENV_VAR, VERSION};

static INIT: Once = Once::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("wander=info"))
}

/// Initialize human-readable logging.
///
/// Reads `WANDER_LOG` for per-crate levels, e.g.
/// `WANDER_LOG=wander_engine=debug,wander_diversity=trace`.
/// Falls back to `wander=info` if unset or invalid.
///
/// Idempotent; later calls (including to [`init_tracing_json`]) are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(env_filter())
            .init();
        tracing::info!(version = VERSION, "wander tracing initialized");
    });
}

/// Initialize structured JSON logging for log shippers.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_target(true))
            .with(env_filter())
            .init();
        tracing::info!(version = VERSION, "wander tracing initialized");
    });
}
