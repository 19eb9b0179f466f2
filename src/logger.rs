//! Tracing initialization for the binary surface.

use tracing_subscriber::EnvFilter;

use crate::config::LoggerSettings;

/// Initializes the global tracing subscriber.
///
/// The configured level acts as the default filter directive; `RUST_LOG`
/// takes precedence when set.
pub fn init(settings: &LoggerSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
