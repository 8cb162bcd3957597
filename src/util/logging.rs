//! Log filter for the file logger

use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset or unparseable
pub const DEFAULT_LOG_DIRECTIVE: &str = "warn";

/// Filter from `RUST_LOG`, with [`DEFAULT_LOG_DIRECTIVE`] as the fallback
pub fn env_filter() -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}
