// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. The result line on stdout is the only
/// output a healthcheck produces unless diagnostics are asked for.
pub const DEFAULT_FILTER: &str = "off";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, writing to stderr.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}
