//! Webhook quoter: the dispatch-and-classification engine
//!
//! Fans a quote request out to every eligible filler endpoint concurrently,
//! classifies each response, records one analytics event per response, and
//! returns the valid quotes. Per-endpoint failures degrade to "no quote from
//! that endpoint" and never fail the overall call.

use futures::future::join_all;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::analytics::EventRecorder;
use crate::classifier::classify;
use crate::filter::EndpointFilter;
use rfq_config::QuoterSettings;
use rfq_providers::{
	AnalyticsSink, CircuitBreakerConfigProvider, ComplianceConfigProvider, EndpointConfigProvider,
};
use chrono::Utc;
use rfq_types::{
	AnalyticsEvent, EndpointConfig, Quote, QuoteRequest, QuoterResult, RawWebhookResponse,
	ResponseClass, WireQuoteRequest,
};

/// Concurrent webhook dispatcher
pub struct WebhookQuoter {
	endpoints: Arc<dyn EndpointConfigProvider>,
	circuit_breaker: Arc<dyn CircuitBreakerConfigProvider>,
	compliance: Arc<dyn ComplianceConfigProvider>,
	recorder: EventRecorder,
	filter: EndpointFilter,
	client: Client,
	timeout_ms: u64,
}

impl WebhookQuoter {
	/// Create a new quoter over the given decision inputs
	pub fn new(
		endpoints: Arc<dyn EndpointConfigProvider>,
		circuit_breaker: Arc<dyn CircuitBreakerConfigProvider>,
		compliance: Arc<dyn ComplianceConfigProvider>,
		sink: Arc<dyn AnalyticsSink>,
		settings: &QuoterSettings,
	) -> Self {
		Self {
			endpoints,
			circuit_breaker,
			compliance,
			recorder: EventRecorder::new(sink),
			filter: EndpointFilter::new(settings.circuit_breaker_overrides.iter().cloned()),
			client: Client::new(),
			timeout_ms: settings.quote_timeout_ms,
		}
	}

	/// Drain hook: wait for all in-flight analytics deliveries to settle
	pub async fn flush_analytics(&self) {
		self.recorder.flush().await;
	}

	/// Fetch quotes for one request from all eligible endpoints
	///
	/// Fails only on provider errors or malformed endpoint configuration;
	/// every per-endpoint outcome is absorbed into classification.
	pub async fn quote(&self, request: &QuoteRequest) -> QuoterResult<Vec<Quote>> {
		let endpoints = self.endpoints.endpoints().await?;
		let breaker_state: HashMap<_, _> = self
			.circuit_breaker
			.configurations()
			.await?
			.into_iter()
			.map(|config| (config.hash.clone(), config))
			.collect();
		let compliance = self.compliance.configurations().await?;

		let eligible =
			self.filter
				.eligible_endpoints(request, endpoints, &breaker_state, &compliance)?;
		if eligible.is_empty() {
			debug!("No eligible endpoints for request {}", request.request_id);
			return Ok(Vec::new());
		}

		info!(
			"Dispatching request {} to {} eligible endpoints",
			request.request_id,
			eligible.len()
		);

		let tasks = eligible.into_iter().map(|endpoint| {
			let request = request.clone();
			let recorder = self.recorder.clone();
			let client = self.client.clone();
			let timeout_ms = self.timeout_ms;

			tokio::spawn(
				async move { query_endpoint(client, recorder, timeout_ms, endpoint, request).await },
			)
		});

		let results = join_all(tasks).await;
		let quotes: Vec<Quote> = results.into_iter().filter_map(|r| r.ok().flatten()).collect();

		info!(
			"Request {} completed: {} valid quotes",
			request.request_id,
			quotes.len()
		);
		Ok(quotes)
	}
}

/// Query one endpoint, classifying every response it produces
///
/// A swapper-less request is direction-ambiguous: the endpoint is also probed
/// with the opposing payload in parallel, and at most one quote is surfaced:
/// the response whose tokenIn/tokenOut exactly match the request's declared
/// direction, with the declared-direction call taking precedence.
async fn query_endpoint(
	client: Client,
	recorder: EventRecorder,
	timeout_ms: u64,
	endpoint: EndpointConfig,
	request: QuoteRequest,
) -> Option<Quote> {
	let declared_wire = request.to_wire(&Uuid::new_v4().to_string());

	if request.swapper.is_some() {
		let class =
			call_and_classify(&client, &recorder, timeout_ms, &endpoint, &request, declared_wire)
				.await;
		return match class {
			ResponseClass::Valid(quote) => Some(quote),
			_ => None,
		};
	}

	let opposing_wire = request.to_opposing_wire(&Uuid::new_v4().to_string());
	let (declared, opposing) = tokio::join!(
		call_and_classify(&client, &recorder, timeout_ms, &endpoint, &request, declared_wire),
		call_and_classify(&client, &recorder, timeout_ms, &endpoint, &request, opposing_wire),
	);

	// Both responses were classified and evented; only the direction-matching
	// one may become the endpoint's quote.
	for class in [declared, opposing] {
		if let ResponseClass::Valid(quote) = class {
			if quote.matches_direction(&request) {
				return Some(quote);
			}
		}
	}
	None
}

/// Issue one timed webhook call and classify its outcome
///
/// Timeouts and transport errors are recorded as status 0 with a null body
/// and classify NON_QUOTE. Exactly one analytics event is emitted per call.
async fn call_and_classify(
	client: &Client,
	recorder: &EventRecorder,
	timeout_ms: u64,
	endpoint: &EndpointConfig,
	request: &QuoteRequest,
	wire: WireQuoteRequest,
) -> ResponseClass {
	let request_time = Utc::now();
	let started = Instant::now();

	let outcome = client
		.post(&endpoint.endpoint)
		.headers(build_headers(endpoint))
		.timeout(Duration::from_millis(timeout_ms))
		.json(&wire)
		.send()
		.await;

	let (status, body) = match outcome {
		Ok(response) => {
			let status = response.status().as_u16();
			let body = response.json::<Value>().await.unwrap_or(Value::Null);
			(status, body)
		},
		Err(e) => {
			debug!("Webhook call to '{}' failed: {}", endpoint.name, e);
			(0, Value::Null)
		},
	};

	let raw = RawWebhookResponse {
		status,
		body,
		request_time,
		response_time: Utc::now(),
		latency_ms: started.elapsed().as_millis() as u64,
	};

	let class = classify(&raw, request);
	debug!(
		"Endpoint '{}' answered request {} with status {} -> {}",
		endpoint.name,
		request.request_id,
		raw.status,
		class.tag()
	);

	recorder.record(AnalyticsEvent::webhook_response(
		endpoint, request, &raw, &class, timeout_ms,
	));
	class
}

fn build_headers(endpoint: &EndpointConfig) -> HeaderMap {
	let mut headers = HeaderMap::new();
	for (key, value) in &endpoint.headers {
		match (
			HeaderName::from_bytes(key.as_bytes()),
			HeaderValue::from_str(value),
		) {
			(Ok(name), Ok(value)) => {
				headers.insert(name, value);
			},
			_ => warn!(
				"Skipping invalid header '{}' configured for endpoint '{}'",
				key, endpoint.name
			),
		}
	}
	headers
}
