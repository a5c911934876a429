//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Glueport tracing/logging system.
///
/// Reads the `GLUEPORT_LOG` environment variable for per-subsystem log
/// levels. Format: `GLUEPORT_LOG=glueport_analysis=debug,glueport_storage=warn`
///
/// Falls back to `glueport=info` if `GLUEPORT_LOG` is not set or is invalid.
///
/// This function is idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("GLUEPORT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("glueport=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
