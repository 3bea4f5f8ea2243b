//! Tracing setup: subscriber initialization, span macros, and event helpers.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Reads `READINESS_LOG` for per-target filtering, e.g.
/// `READINESS_LOG=readiness_scan=debug,readiness_publish=info`.
/// Falls back to the configured log level when unset or invalid.
///
/// Idempotent; later calls are no-ops.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("READINESS_LOG")
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr);

        // A subscriber may already be installed by an embedding test harness.
        let _ = if config.json_logs {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
