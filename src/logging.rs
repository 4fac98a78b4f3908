//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter, e.g. `LEGACYLIFT_LOG=debug`.
pub const LOG_ENV: &str = "LEGACYLIFT_LOG";

/// Guards one-time subscriber installation.
static INIT: Once = Once::new();

/// Install the stderr subscriber.
///
/// The filter comes from `LEGACYLIFT_LOG` when set and valid; otherwise it is
/// `legacylift=debug` with `--verbose` and `warn` without. Later calls are
/// no-ops.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "legacylift=debug" } else { "warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| return EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .with(filter)
            .init();
    });
}
