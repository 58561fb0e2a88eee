//! Logger setup backed by `tracing-subscriber`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `<name>=<default_level>` is used and
/// everything else logs at `warn`.
///
/// Calling this more than once is harmless: later calls are ignored.
pub fn setup_logger(name: &str, default_level: &str) {
    let crate_name = name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{crate_name}={default_level},warn")));

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .try_init()
    {
        tracing::debug!("Logger already initialized: {}", e);
    }
}
