//! In-memory provider implementations
//!
//! Static snapshots for tests and local runs; production deployments supply
//! their own provider implementations backed by the real configuration
//! stores.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::traits::{
	derive_address_to_filler, AnalyticsSink, CircuitBreakerConfigProvider,
	ComplianceConfigProvider, EndpointConfigProvider,
};
use rfq_types::{
	AnalyticsEvent, CircuitBreakerConfig, ComplianceConfig, EndpointConfig, ProviderError,
	ProviderResult,
};

/// Endpoint provider serving a fixed configuration snapshot
#[derive(Debug, Default)]
pub struct StaticEndpointProvider {
	endpoints: Vec<EndpointConfig>,
}

impl StaticEndpointProvider {
	pub fn new(endpoints: Vec<EndpointConfig>) -> Self {
		Self { endpoints }
	}
}

#[async_trait]
impl EndpointConfigProvider for StaticEndpointProvider {
	async fn endpoints(&self) -> ProviderResult<Vec<EndpointConfig>> {
		Ok(self.endpoints.clone())
	}

	async fn address_to_filler(&self) -> ProviderResult<HashMap<String, String>> {
		Ok(derive_address_to_filler(&self.endpoints))
	}
}

/// Circuit-breaker provider serving a fixed configuration snapshot
#[derive(Debug, Default)]
pub struct StaticCircuitBreakerProvider {
	configurations: Vec<CircuitBreakerConfig>,
}

impl StaticCircuitBreakerProvider {
	pub fn new(configurations: Vec<CircuitBreakerConfig>) -> Self {
		Self { configurations }
	}
}

#[async_trait]
impl CircuitBreakerConfigProvider for StaticCircuitBreakerProvider {
	async fn configurations(&self) -> ProviderResult<Vec<CircuitBreakerConfig>> {
		Ok(self.configurations.clone())
	}
}

/// Compliance provider serving a fixed rule set
#[derive(Debug, Default)]
pub struct StaticComplianceProvider {
	configurations: Vec<ComplianceConfig>,
}

impl StaticComplianceProvider {
	pub fn new(configurations: Vec<ComplianceConfig>) -> Self {
		Self { configurations }
	}
}

#[async_trait]
impl ComplianceConfigProvider for StaticComplianceProvider {
	async fn configurations(&self) -> ProviderResult<Vec<ComplianceConfig>> {
		Ok(self.configurations.clone())
	}
}

/// Analytics sink capturing events in memory
///
/// Tests assert the one-event-per-response invariant against the captured
/// list. The failing variant exercises the swallow-and-log path.
#[derive(Debug, Default)]
pub struct MemoryAnalyticsSink {
	events: RwLock<Vec<AnalyticsEvent>>,
	failing: bool,
}

impl MemoryAnalyticsSink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sink whose every delivery fails
	pub fn failing() -> Self {
		Self {
			events: RwLock::new(Vec::new()),
			failing: true,
		}
	}

	/// Snapshot of all captured events
	pub fn events(&self) -> Vec<AnalyticsEvent> {
		self.events.read().expect("events lock poisoned").clone()
	}
}

#[async_trait]
impl AnalyticsSink for MemoryAnalyticsSink {
	async fn send_event(&self, event: AnalyticsEvent) -> ProviderResult<u16> {
		if self.failing {
			return Err(ProviderError::Unavailable {
				reason: "analytics sink configured to fail".to_string(),
			});
		}
		self.events.write().expect("events lock poisoned").push(event);
		Ok(200)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn static_endpoint_provider_derives_address_map() {
		let provider = StaticEndpointProvider::new(vec![EndpointConfig::new(
			"filler1",
			"https://a.example.com/quote",
			"h1",
		)
		.with_addresses(vec!["0xa1".to_string()])]);

		let map = provider.address_to_filler().await.unwrap();
		assert_eq!(map.get("0xa1").map(String::as_str), Some("filler1"));
	}
}
