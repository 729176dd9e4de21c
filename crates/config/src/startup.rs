//! Logging initialization and startup reporting

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::settings::{LogFormat, LoggingSettings, Settings};

/// Initialize the global tracing subscriber from logging settings
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logging(settings: &LoggingSettings) {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.level.clone()));

	let builder = tracing_subscriber::fmt().with_env_filter(filter);

	// try_init: tests may install a subscriber more than once
	let result = match settings.format {
		LogFormat::Json => builder.json().try_init(),
		LogFormat::Pretty => builder.pretty().try_init(),
		LogFormat::Compact => builder.compact().try_init(),
	};

	if result.is_err() {
		tracing::debug!("tracing subscriber already initialized");
	}
}

/// Log the effective dispatch configuration at startup
pub fn log_startup(settings: &Settings, endpoint_count: usize) {
	info!(
		"RFQ quoter starting: {} configured endpoints, {}ms webhook timeout, {}s endpoint cache TTL, {} circuit-breaker overrides",
		endpoint_count,
		settings.quoter.quote_timeout_ms,
		settings.quoter.endpoint_cache_ttl_secs,
		settings.quoter.circuit_breaker_overrides.len()
	);
}
