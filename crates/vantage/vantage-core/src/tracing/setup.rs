//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter directives.
pub const LOG_ENV_VAR: &str = "VANTAGE_LOG";

/// Initialize the Vantage tracing/logging system.
///
/// Reads `VANTAGE_LOG` for per-subsystem log levels.
/// Format: `VANTAGE_LOG=vantage_analysis::dedup=debug,vantage_analysis=info`
///
/// Falls back to `vantage=info` if `VANTAGE_LOG` is not set or is invalid.
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("vantage=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
