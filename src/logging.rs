//! Logging init: human-readable events on stderr, stdout stays free for URLs.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,logpuzzle=info";

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
