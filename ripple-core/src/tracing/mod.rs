//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Ripple tracing/logging system.
///
/// Reads the `RIPPLE_LOG` environment variable for per-subsystem log
/// levels, e.g. `RIPPLE_LOG=cascade=debug,correlation=trace`.
///
/// Falls back to `ripple=info` if `RIPPLE_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("RIPPLE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("ripple=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
