//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing to the error stream.
///
/// Defaults to the `warn` level so non-fatal member warnings are visible
/// without any configuration. Set the `ARSPLIT_LOG` env var to a filter
/// spec (e.g. `info`, `arsplit=debug`) for more.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("ARSPLIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
