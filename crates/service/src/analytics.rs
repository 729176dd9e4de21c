//! Fire-and-forget analytics recording
//!
//! Every webhook response produces one event. Delivery is spawned as a
//! detached task so it never blocks or fails the quoting path; `flush`
//! awaits all in-flight deliveries for tests and graceful shutdown.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use tracing::{debug, warn};

use rfq_providers::AnalyticsSink;
use rfq_types::AnalyticsEvent;

/// Detached-delivery wrapper around an [`AnalyticsSink`]
#[derive(Clone)]
pub struct EventRecorder {
	sink: Arc<dyn AnalyticsSink>,
	in_flight: Arc<AtomicUsize>,
	notify: Arc<Notify>,
}

impl EventRecorder {
	pub fn new(sink: Arc<dyn AnalyticsSink>) -> Self {
		Self {
			sink,
			in_flight: Arc::new(AtomicUsize::new(0)),
			notify: Arc::new(Notify::new()),
		}
	}

	/// Spawn a detached delivery for one event
	///
	/// Sink failures are logged and swallowed.
	pub fn record(&self, event: AnalyticsEvent) {
		self.in_flight.fetch_add(1, Ordering::AcqRel);

		let sink = Arc::clone(&self.sink);
		let in_flight = Arc::clone(&self.in_flight);
		let notify = Arc::clone(&self.notify);

		tokio::spawn(async move {
			match sink.send_event(event).await {
				Ok(status) => debug!("analytics event delivered (status {})", status),
				Err(e) => warn!("analytics event delivery failed: {}", e),
			}
			in_flight.fetch_sub(1, Ordering::AcqRel);
			notify.notify_waiters();
		});
	}

	/// Wait until every spawned delivery has settled
	pub async fn flush(&self) {
		loop {
			let notified = self.notify.notified();
			if self.in_flight.load(Ordering::Acquire) == 0 {
				return;
			}
			notified.await;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::Utc;
	use rfq_providers::MemoryAnalyticsSink;
	use rfq_types::{AnalyticsEventType, EndpointConfig, QuoteRequest, TradeType};
	use rfq_types::{RawWebhookResponse, ResponseClass};

	fn event() -> AnalyticsEvent {
		let endpoint = EndpointConfig::new("mm", "https://mm.example.com/quote", "h1");
		let request = QuoteRequest {
			request_id: "req-1".to_string(),
			token_in_chain_id: 1,
			token_out_chain_id: 1,
			swapper: None,
			token_in: "0xaaa".to_string(),
			token_out: "0xbbb".to_string(),
			amount: "100".to_string(),
			trade_type: TradeType::ExactInput,
			num_outputs: 1,
		};
		let now = Utc::now();
		let raw = RawWebhookResponse {
			status: 404,
			body: serde_json::Value::Null,
			request_time: now,
			response_time: now,
			latency_ms: 7,
		};
		AnalyticsEvent::webhook_response(&endpoint, &request, &raw, &ResponseClass::NonQuote, 500)
	}

	#[tokio::test]
	async fn flush_drains_all_recorded_events() {
		let sink = Arc::new(MemoryAnalyticsSink::new());
		let recorder = EventRecorder::new(sink.clone());

		for _ in 0..10 {
			recorder.record(event());
		}
		recorder.flush().await;

		let events = sink.events();
		assert_eq!(events.len(), 10);
		assert_eq!(events[0].event_type, AnalyticsEventType::WebhookResponse);
		assert_eq!(events[0].response_type, "NON_QUOTE");
		assert_eq!(events[0].status, 404);
	}

	#[tokio::test]
	async fn sink_failure_is_swallowed() {
		let sink = Arc::new(MemoryAnalyticsSink::failing());
		let recorder = EventRecorder::new(sink);

		recorder.record(event());
		// Completes despite the failing sink
		recorder.flush().await;
	}

	#[tokio::test]
	async fn flush_on_idle_recorder_returns_immediately() {
		let recorder = EventRecorder::new(Arc::new(MemoryAnalyticsSink::new()));
		recorder.flush().await;
	}
}
