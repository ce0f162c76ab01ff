use std::io::stderr;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "plist2swift=warn";

/// Sends logs to stderr, filtered by `RUST_LOG`. Only our own warnings by default.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var("RUST_LOG").ok()))
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn env_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
