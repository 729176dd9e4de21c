//! Analytics event model
//!
//! Exactly one event is emitted per raw webhook response received, regardless
//! of how the response classified.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classification::{FieldViolation, RawWebhookResponse, ResponseClass};
use crate::endpoints::EndpointConfig;
use crate::request::QuoteRequest;

/// Analytics event type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalyticsEventType {
	WebhookResponse,
}

/// Fire-and-forget analytics record for one webhook response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
	pub event_type: AnalyticsEventType,
	pub request_id: String,
	/// Quote id from the response body, when one classified VALID
	#[serde(skip_serializing_if = "Option::is_none")]
	pub quote_id: Option<String>,
	pub endpoint_name: String,
	pub endpoint_url: String,
	pub request_time: DateTime<Utc>,
	pub response_time: DateTime<Utc>,
	pub latency_ms: u64,
	/// Configured per-call timeout at dispatch time
	pub timeout_setting_ms: u64,
	pub status: u16,
	/// Raw response body as received
	pub data: serde_json::Value,
	/// Classification tag: VALID, VALIDATION_ERROR, REQUEST_ID_MISMATCH, NON_QUOTE
	pub response_type: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub validation_errors: Option<Vec<FieldViolation>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub mismatched_request_id: Option<String>,
}

impl AnalyticsEvent {
	/// Build the event for one classified webhook response
	pub fn webhook_response(
		endpoint: &EndpointConfig,
		request: &QuoteRequest,
		raw: &RawWebhookResponse,
		class: &ResponseClass,
		timeout_setting_ms: u64,
	) -> Self {
		let (quote_id, validation_errors, mismatched_request_id) = match class {
			ResponseClass::Valid(quote) => (Some(quote.quote_id.clone()), None, None),
			ResponseClass::ValidationError(violations) => (None, Some(violations.clone()), None),
			ResponseClass::RequestIdMismatch { received } => (None, None, Some(received.clone())),
			ResponseClass::NonQuote => (None, None, None),
		};

		Self {
			event_type: AnalyticsEventType::WebhookResponse,
			request_id: request.request_id.clone(),
			quote_id,
			endpoint_name: endpoint.name.clone(),
			endpoint_url: endpoint.endpoint.clone(),
			request_time: raw.request_time,
			response_time: raw.response_time,
			latency_ms: raw.latency_ms,
			timeout_setting_ms,
			status: raw.status,
			data: raw.body.clone(),
			response_type: class.tag().to_string(),
			validation_errors,
			mismatched_request_id,
		}
	}
}
