//! Pre-dispatch endpoint filtering
//!
//! Decides which configured endpoints a request may be dispatched to, based
//! on the endpoint's chain allow-list, circuit-breaker state, and compliance
//! exclusions. Filtering decisions are not errors: dropped endpoints are
//! logged at debug level and produce no analytics events, since no call was
//! made.

use std::collections::{HashMap, HashSet};
use tracing::debug;
use url::Url;

use rfq_types::{CircuitBreakerConfig, ComplianceConfig, EndpointConfig, QuoteRequest, QuoterError, QuoterResult};

/// Endpoint eligibility policy
///
/// The override set is supplied at construction time; hashes in it are
/// dispatched regardless of their circuit-breaker `enabled` flag.
#[derive(Debug, Clone, Default)]
pub struct EndpointFilter {
	overrides: HashSet<String>,
}

impl EndpointFilter {
	pub fn new(overrides: impl IntoIterator<Item = String>) -> Self {
		Self {
			overrides: overrides.into_iter().collect(),
		}
	}

	/// Compute the endpoints eligible for one request
	///
	/// Fails only on malformed endpoint configuration (an endpoint URL whose
	/// host cannot be determined); every per-endpoint policy miss is a silent
	/// skip.
	pub fn eligible_endpoints(
		&self,
		request: &QuoteRequest,
		endpoints: Vec<EndpointConfig>,
		circuit_breaker: &HashMap<String, CircuitBreakerConfig>,
		compliance: &[ComplianceConfig],
	) -> QuoterResult<Vec<EndpointConfig>> {
		let mut eligible = Vec::with_capacity(endpoints.len());

		for endpoint in endpoints {
			if !endpoint.supports_chain(request.token_in_chain_id) {
				debug!(
					"Skipping endpoint '{}': chain {} not in configured chain ids {:?}",
					endpoint.name, request.token_in_chain_id, endpoint.chain_ids
				);
				continue;
			}

			if !self.passes_circuit_breaker(&endpoint, circuit_breaker) {
				debug!(
					"Skipping endpoint '{}': circuit breaker disabled for hash '{}'",
					endpoint.name, endpoint.hash
				);
				continue;
			}

			if self.is_compliance_excluded(request, &endpoint, compliance)? {
				debug!(
					"Skipping endpoint '{}': swapper excluded by compliance rule",
					endpoint.name
				);
				continue;
			}

			eligible.push(endpoint);
		}

		Ok(eligible)
	}

	/// Included when the hash is absent (fail open), enabled, or overridden
	fn passes_circuit_breaker(
		&self,
		endpoint: &EndpointConfig,
		circuit_breaker: &HashMap<String, CircuitBreakerConfig>,
	) -> bool {
		if self.overrides.contains(&endpoint.hash) {
			return true;
		}
		match circuit_breaker.get(&endpoint.hash) {
			Some(config) => config.enabled,
			None => true,
		}
	}

	fn is_compliance_excluded(
		&self,
		request: &QuoteRequest,
		endpoint: &EndpointConfig,
		compliance: &[ComplianceConfig],
	) -> QuoterResult<bool> {
		let swapper = match &request.swapper {
			Some(swapper) => swapper,
			None => return Ok(false),
		};

		if compliance.is_empty() {
			return Ok(false);
		}

		let host = endpoint_host(endpoint)?;
		Ok(compliance.iter().any(|rule| {
			rule.endpoints.iter().any(|domain| domain == &host)
				&& rule.addresses.iter().any(|address| address == swapper)
		}))
	}
}

fn endpoint_host(endpoint: &EndpointConfig) -> QuoterResult<String> {
	let url = Url::parse(&endpoint.endpoint).map_err(|e| QuoterError::InvalidEndpoint {
		name: endpoint.name.clone(),
		reason: e.to_string(),
	})?;
	url.host_str()
		.map(str::to_string)
		.ok_or_else(|| QuoterError::InvalidEndpoint {
			name: endpoint.name.clone(),
			reason: "endpoint URL has no host".to_string(),
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use rfq_types::TradeType;

	fn request(chain_id: u64, swapper: Option<&str>) -> QuoteRequest {
		QuoteRequest {
			request_id: "req-1".to_string(),
			token_in_chain_id: chain_id,
			token_out_chain_id: chain_id,
			swapper: swapper.map(str::to_string),
			token_in: "0xaaa".to_string(),
			token_out: "0xbbb".to_string(),
			amount: "100".to_string(),
			trade_type: TradeType::ExactInput,
			num_outputs: 1,
		}
	}

	fn breaker(entries: Vec<CircuitBreakerConfig>) -> HashMap<String, CircuitBreakerConfig> {
		entries.into_iter().map(|c| (c.hash.clone(), c)).collect()
	}

	#[test]
	fn chain_allow_list_excludes_other_chains() {
		let filter = EndpointFilter::default();
		let endpoints = vec![
			EndpointConfig::new("mainnet-only", "https://a.example.com/quote", "h1")
				.with_chain_ids(vec![1]),
			EndpointConfig::new("any-chain", "https://b.example.com/quote", "h2"),
		];

		let eligible = filter
			.eligible_endpoints(&request(137, None), endpoints, &HashMap::new(), &[])
			.unwrap();
		assert_eq!(eligible.len(), 1);
		assert_eq!(eligible[0].name, "any-chain");
	}

	#[test]
	fn absent_hash_is_fail_open() {
		let filter = EndpointFilter::default();
		let endpoints = vec![EndpointConfig::new(
			"unknown-hash",
			"https://a.example.com/quote",
			"not-configured",
		)];

		let eligible = filter
			.eligible_endpoints(&request(1, None), endpoints, &HashMap::new(), &[])
			.unwrap();
		assert_eq!(eligible.len(), 1);
	}

	#[test]
	fn disabled_endpoint_is_excluded() {
		let filter = EndpointFilter::default();
		let endpoints = vec![EndpointConfig::new("mm", "https://a.example.com/quote", "h1")];
		let breaker = breaker(vec![CircuitBreakerConfig {
			hash: "h1".to_string(),
			fade_rate: 0.9,
			enabled: false,
		}]);

		let eligible = filter
			.eligible_endpoints(&request(1, None), endpoints, &breaker, &[])
			.unwrap();
		assert!(eligible.is_empty());
	}

	#[test]
	fn override_beats_disabled_state() {
		let filter = EndpointFilter::new(vec!["h1".to_string()]);
		let endpoints = vec![EndpointConfig::new("mm", "https://a.example.com/quote", "h1")];
		let breaker = breaker(vec![CircuitBreakerConfig {
			hash: "h1".to_string(),
			fade_rate: 0.9,
			enabled: false,
		}]);

		let eligible = filter
			.eligible_endpoints(&request(1, None), endpoints, &breaker, &[])
			.unwrap();
		assert_eq!(eligible.len(), 1);
	}

	#[test]
	fn enabled_endpoint_passes() {
		let filter = EndpointFilter::default();
		let endpoints = vec![EndpointConfig::new("mm", "https://a.example.com/quote", "h1")];
		let breaker = breaker(vec![CircuitBreakerConfig {
			hash: "h1".to_string(),
			fade_rate: 0.02,
			enabled: true,
		}]);

		let eligible = filter
			.eligible_endpoints(&request(1, None), endpoints, &breaker, &[])
			.unwrap();
		assert_eq!(eligible.len(), 1);
	}

	#[test]
	fn compliance_rule_excludes_matching_swapper_and_domain() {
		let filter = EndpointFilter::default();
		let endpoints = vec![
			EndpointConfig::new("covered", "https://covered.example.com/quote", "h1"),
			EndpointConfig::new("other", "https://other.example.com/quote", "h2"),
		];
		let rules = vec![ComplianceConfig {
			endpoints: vec!["covered.example.com".to_string()],
			addresses: vec!["0xbad".to_string()],
		}];

		let eligible = filter
			.eligible_endpoints(&request(1, Some("0xbad")), endpoints, &HashMap::new(), &rules)
			.unwrap();
		assert_eq!(eligible.len(), 1);
		assert_eq!(eligible[0].name, "other");
	}

	#[test]
	fn compliance_rule_ignores_other_swappers_and_null_swapper() {
		let filter = EndpointFilter::default();
		let endpoints = vec![EndpointConfig::new(
			"covered",
			"https://covered.example.com/quote",
			"h1",
		)];
		let rules = vec![ComplianceConfig {
			endpoints: vec!["covered.example.com".to_string()],
			addresses: vec!["0xbad".to_string()],
		}];

		let with_other = filter
			.eligible_endpoints(
				&request(1, Some("0xfine")),
				endpoints.clone(),
				&HashMap::new(),
				&rules,
			)
			.unwrap();
		assert_eq!(with_other.len(), 1);

		let without_swapper = filter
			.eligible_endpoints(&request(1, None), endpoints, &HashMap::new(), &rules)
			.unwrap();
		assert_eq!(without_swapper.len(), 1);
	}

	#[test]
	fn malformed_endpoint_url_fails_eligibility() {
		let filter = EndpointFilter::default();
		let endpoints = vec![EndpointConfig::new("broken", "not a url", "h1")];
		let rules = vec![ComplianceConfig {
			endpoints: vec!["covered.example.com".to_string()],
			addresses: vec!["0xbad".to_string()],
		}];

		let result =
			filter.eligible_endpoints(&request(1, Some("0xbad")), endpoints, &HashMap::new(), &rules);
		assert!(matches!(result, Err(QuoterError::InvalidEndpoint { .. })));
	}
}
