//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when neither `RUST_LOG` nor `trace_level` is set.
const DEFAULT_LEVEL: &str = "info";

/// Resolves the filter directive: `RUST_LOG`, then `config.trace_level`, then `"info"`.
#[must_use]
pub fn resolve_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
        // Fall back silently: no subscriber exists yet to report the bad directive.
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    })
}

/// Installs a global tracing subscriber writing human-readable events to stderr.
///
/// Idempotent: only the first call takes effect, later calls are ignored.
///
/// # Example
///
/// ```rust
/// use listboard::observability::init_tracing;
/// use listboard::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let subscriber = tracing_subscriber::registry()
        .with(resolve_filter(config))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true));

    let _ = subscriber.try_init();
}
