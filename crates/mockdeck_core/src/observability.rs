//! Tracing subscriber initialization.

use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Install a formatted tracing subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
///
/// # Examples
///
/// ```
/// mockdeck_core::init_tracing("warn");
/// ```
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => info!(default_filter, "Tracing initialized"),
        Err(e) => debug!(error = %e, "Tracing subscriber already installed"),
    }
}
