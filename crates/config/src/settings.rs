//! Configuration settings structures

use rfq_types::EndpointConfig;
use serde::{Deserialize, Serialize};

/// Default per-call webhook timeout in milliseconds
pub const DEFAULT_QUOTE_TIMEOUT_MS: u64 = 500;

/// Default endpoint configuration cache TTL in seconds
pub const DEFAULT_ENDPOINT_CACHE_TTL_SECS: u64 = 300;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
	#[serde(default)]
	pub quoter: QuoterSettings,
	#[serde(default)]
	pub logging: LoggingSettings,
	/// Filler endpoints defined directly in the config file, used when no
	/// external endpoint provider is wired in
	#[serde(default)]
	pub endpoints: Vec<EndpointConfig>,
}

/// Dispatcher configuration
///
/// All dispatcher decision inputs are explicit fields here rather than
/// ambient state.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuoterSettings {
	/// Per-call webhook timeout in milliseconds
	#[serde(default = "default_quote_timeout_ms")]
	pub quote_timeout_ms: u64,
	/// TTL for the cached endpoint configuration
	#[serde(default = "default_endpoint_cache_ttl_secs")]
	pub endpoint_cache_ttl_secs: u64,
	/// Configuration hashes dispatched regardless of circuit-breaker state
	#[serde(default)]
	pub circuit_breaker_overrides: Vec<String>,
}

fn default_quote_timeout_ms() -> u64 {
	DEFAULT_QUOTE_TIMEOUT_MS
}

fn default_endpoint_cache_ttl_secs() -> u64 {
	DEFAULT_ENDPOINT_CACHE_TTL_SECS
}

impl Default for QuoterSettings {
	fn default() -> Self {
		Self {
			quote_timeout_ms: DEFAULT_QUOTE_TIMEOUT_MS,
			endpoint_cache_ttl_secs: DEFAULT_ENDPOINT_CACHE_TTL_SECS,
			circuit_breaker_overrides: Vec::new(),
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	#[serde(default = "default_log_level")]
	pub level: String,
	#[serde(default = "default_log_format")]
	pub format: LogFormat,
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_log_format() -> LogFormat {
	LogFormat::Pretty
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_dispatch_policy() {
		let settings = Settings::default();
		assert_eq!(settings.quoter.quote_timeout_ms, 500);
		assert_eq!(settings.quoter.endpoint_cache_ttl_secs, 300);
		assert!(settings.quoter.circuit_breaker_overrides.is_empty());
	}
}
