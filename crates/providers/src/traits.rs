//! Provider and sink traits

use async_trait::async_trait;
use std::collections::HashMap;

use rfq_types::{
	AnalyticsEvent, CircuitBreakerConfig, ComplianceConfig, EndpointConfig, ProviderResult,
};

/// Supplies the current list of configured filler endpoints
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EndpointConfigProvider: Send + Sync {
	/// Fetch the configured endpoints
	async fn endpoints(&self) -> ProviderResult<Vec<EndpointConfig>>;

	/// Map of on-chain filler address to logical filler identity, derived from
	/// the same fetched configuration
	async fn address_to_filler(&self) -> ProviderResult<HashMap<String, String>>;
}

/// Maps endpoint configuration hashes to circuit-breaker state
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CircuitBreakerConfigProvider: Send + Sync {
	async fn configurations(&self) -> ProviderResult<Vec<CircuitBreakerConfig>>;
}

/// Supplies compliance exclusion rules
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplianceConfigProvider: Send + Sync {
	async fn configurations(&self) -> ProviderResult<Vec<ComplianceConfig>>;
}

/// Accepts fire-and-forget analytics events
///
/// Must tolerate concurrent writes from many in-flight dispatches. Failures
/// are logged by the caller and never affect the quoting path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
	/// Deliver one event, returning the sink's status code
	async fn send_event(&self, event: AnalyticsEvent) -> ProviderResult<u16>;
}

/// Derive the address→filler map from endpoint configuration
///
/// One filler may operate multiple addresses and endpoints; the endpoint name
/// is the logical filler identity.
pub fn derive_address_to_filler(endpoints: &[EndpointConfig]) -> HashMap<String, String> {
	let mut map = HashMap::new();
	for endpoint in endpoints {
		if let Some(addresses) = &endpoint.addresses {
			for address in addresses {
				map.insert(address.clone(), endpoint.name.clone());
			}
		}
	}
	map
}
