//! Tracing subscriber setup for the binaries.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`]. Safe to call more than once; later calls are
/// ignored.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
