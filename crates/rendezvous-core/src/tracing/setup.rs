//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV_VAR: &str = "RENDEZVOUS_LOG";

/// Filter used when `RENDEZVOUS_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "rendezvous=info";

static INIT: Once = Once::new();

/// Initialize the rendezvous tracing/logging system.
///
/// Reads the `RENDEZVOUS_LOG` environment variable for filter directives,
/// e.g. `RENDEZVOUS_LOG=rendezvous_graph=debug`. Falls back to
/// `rendezvous=info` if unset or invalid.
///
/// Events are written to stderr. Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = env_filter();

        // try_init: an embedding application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// The filter `init_tracing` installs, read from `RENDEZVOUS_LOG`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
