//! Logging setup shared by every binary in the workspace

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
