//! RFQ Webhook Quoter Library
//!
//! Aggregates RFQ quotes from market-maker webhook endpoints: fans each quote
//! request out to every eligible endpoint, classifies the responses, records
//! analytics, and returns the valid quotes.

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

// Core domain types
pub use rfq_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	AnalyticsEvent,
	AnalyticsEventType,
	CircuitBreakerConfig,
	ComplianceConfig,
	EndpointConfig,
	FadeRow,
	FieldViolation,
	// Error types
	ProviderError,
	Quote,
	// Primary domain entities
	QuoteRequest,
	QuoterError,
	RawWebhookResponse,
	ResponseClass,
	TradeType,
	ViolationKind,
};

// Service layer
pub use rfq_service::{calculate_filler_fade_rates, classify, EndpointFilter, EventRecorder, WebhookQuoter};

// Provider layer
pub use rfq_providers::{
	derive_address_to_filler, AnalyticsSink, CachedEndpointProvider, CircuitBreakerConfigProvider,
	ComplianceConfigProvider, EndpointConfigProvider, MemoryAnalyticsSink,
	StaticCircuitBreakerProvider, StaticComplianceProvider, StaticEndpointProvider,
};

// Config
pub use rfq_config::{init_logging, load_config, load_config_from, log_startup, Settings};

// Module aliases for advanced usage
pub mod types {
	pub use rfq_types::*;
}

pub mod providers {
	pub use rfq_providers::*;
}

pub mod config {
	pub use rfq_config::*;
}

pub mod service {
	pub use rfq_service::*;
}

pub mod mocks;

// Re-export external dependencies for integration tests and demos
pub use async_trait;
pub use reqwest;

/// Builder pattern for assembling a configured quoter
#[derive(Default)]
pub struct QuoterBuilder {
	settings: Option<Settings>,
	endpoints: Option<Arc<dyn EndpointConfigProvider>>,
	circuit_breaker: Option<Arc<dyn CircuitBreakerConfigProvider>>,
	compliance: Option<Arc<dyn ComplianceConfigProvider>>,
	sink: Option<Arc<dyn AnalyticsSink>>,
}

impl QuoterBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set custom settings (otherwise defaults are used)
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Set the endpoint configuration provider (required)
	pub fn with_endpoint_provider(mut self, provider: Arc<dyn EndpointConfigProvider>) -> Self {
		self.endpoints = Some(provider);
		self
	}

	/// Set the circuit breaker configuration provider
	pub fn with_circuit_breaker_provider(
		mut self,
		provider: Arc<dyn CircuitBreakerConfigProvider>,
	) -> Self {
		self.circuit_breaker = Some(provider);
		self
	}

	/// Set the compliance configuration provider
	pub fn with_compliance_provider(mut self, provider: Arc<dyn ComplianceConfigProvider>) -> Self {
		self.compliance = Some(provider);
		self
	}

	/// Set the analytics sink
	pub fn with_analytics_sink(mut self, sink: Arc<dyn AnalyticsSink>) -> Self {
		self.sink = Some(sink);
		self
	}

	/// Assemble the quoter
	///
	/// The endpoint provider is wrapped in a TTL cache; circuit breaker and
	/// compliance providers default to empty static configurations, and the
	/// analytics sink defaults to an in-memory one.
	pub fn build(self) -> Result<WebhookQuoter, Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();

		let endpoints = self
			.endpoints
			.ok_or("An endpoint configuration provider is required")?;
		let endpoints: Arc<dyn EndpointConfigProvider> = Arc::new(CachedEndpointProvider::new(
			endpoints,
			Duration::from_secs(settings.quoter.endpoint_cache_ttl_secs),
		));

		let circuit_breaker = self
			.circuit_breaker
			.unwrap_or_else(|| Arc::new(StaticCircuitBreakerProvider::default()));
		let compliance = self
			.compliance
			.unwrap_or_else(|| Arc::new(StaticComplianceProvider::default()));
		let sink = self
			.sink
			.unwrap_or_else(|| Arc::new(MemoryAnalyticsSink::new()));

		info!(
			"Quoter assembled: timeout={}ms, endpoint cache ttl={}s, {} circuit breaker override(s)",
			settings.quoter.quote_timeout_ms,
			settings.quoter.endpoint_cache_ttl_secs,
			settings.quoter.circuit_breaker_overrides.len()
		);

		Ok(WebhookQuoter::new(
			endpoints,
			circuit_breaker,
			compliance,
			sink,
			&settings.quoter,
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn build_requires_an_endpoint_provider() {
		assert!(QuoterBuilder::new().build().is_err());
	}

	#[test]
	fn build_with_defaults_succeeds() {
		let quoter = QuoterBuilder::new()
			.with_endpoint_provider(Arc::new(StaticEndpointProvider::new(Vec::new())))
			.build();
		assert!(quoter.is_ok());
	}
}
