//! Filler endpoint, circuit-breaker and compliance configuration models

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A configured filler webhook endpoint
///
/// Produced by the endpoint configuration provider; immutable per fetch
/// generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointConfig {
	/// Human-readable endpoint name (used in logs and analytics)
	pub name: String,

	/// Webhook URL requests are POSTed to
	pub endpoint: String,

	/// Headers attached to every request to this endpoint
	#[serde(default)]
	pub headers: HashMap<String, String>,

	/// Optional chain allow-list; absent means any chain is accepted
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub chain_ids: Option<Vec<u64>>,

	/// Stable configuration hash, the key into circuit-breaker state
	pub hash: String,

	/// Filler addresses operated behind this endpoint, when declared
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub addresses: Option<Vec<String>>,
}

impl EndpointConfig {
	pub fn new(name: impl Into<String>, endpoint: impl Into<String>, hash: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			endpoint: endpoint.into(),
			headers: HashMap::new(),
			chain_ids: None,
			hash: hash.into(),
			addresses: None,
		}
	}

	pub fn with_chain_ids(mut self, chain_ids: Vec<u64>) -> Self {
		self.chain_ids = Some(chain_ids);
		self
	}

	pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
		self.headers = headers;
		self
	}

	pub fn with_addresses(mut self, addresses: Vec<String>) -> Self {
		self.addresses = Some(addresses);
		self
	}

	/// Whether this endpoint serves the given chain
	pub fn supports_chain(&self, chain_id: u64) -> bool {
		match &self.chain_ids {
			Some(ids) => ids.contains(&chain_id),
			None => true,
		}
	}
}

/// Circuit-breaker state for one endpoint configuration hash
///
/// A hash absent from the configured set is treated as enabled (fail open).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CircuitBreakerConfig {
	/// Endpoint configuration hash this row applies to
	pub hash: String,

	/// Fraction of quotes the filler failed to honor, in [0, 1]
	pub fade_rate: f64,

	/// Whether dispatch to this endpoint is currently allowed
	pub enabled: bool,
}

/// Compliance exclusion rule
///
/// Requests from any of `addresses` must not be dispatched to endpoints whose
/// host is in `endpoints`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComplianceConfig {
	/// Endpoint domains the rule covers
	pub endpoints: Vec<String>,

	/// Swapper addresses excluded from those domains
	pub addresses: Vec<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoint_without_allow_list_supports_any_chain() {
		let endpoint = EndpointConfig::new("mm", "https://mm.example.com/quote", "hash-1");
		assert!(endpoint.supports_chain(1));
		assert!(endpoint.supports_chain(42161));
	}

	#[test]
	fn endpoint_allow_list_is_exact() {
		let endpoint = EndpointConfig::new("mm", "https://mm.example.com/quote", "hash-1")
			.with_chain_ids(vec![1, 137]);
		assert!(endpoint.supports_chain(137));
		assert!(!endpoint.supports_chain(10));
	}
}
