//! Raw webhook responses and their classification outcomes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quote::Quote;

/// A raw webhook response as observed on the wire
///
/// Timeouts and network errors are represented with status `0` and a null
/// body so they flow through the same classification and analytics path.
#[derive(Debug, Clone)]
pub struct RawWebhookResponse {
	/// HTTP status code; `0` when no response was received
	pub status: u16,

	/// Response body, `null` when absent or unparseable as JSON
	pub body: serde_json::Value,

	/// When the request was issued
	pub request_time: DateTime<Utc>,

	/// When the response (or timeout) was observed
	pub response_time: DateTime<Utc>,

	/// Per-call latency in milliseconds
	pub latency_ms: u64,
}

/// Kind of a field-level schema violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
	MissingField,
	InvalidType,
	InvalidValue,
}

/// One field-level schema violation, with a stable message for observability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
	/// Path of the offending field
	pub field: String,

	/// Human-readable description
	pub message: String,

	/// Violation kind
	pub kind: ViolationKind,
}

impl FieldViolation {
	pub fn missing(field: &str) -> Self {
		Self {
			field: field.to_string(),
			message: format!("\"{}\" is required", field),
			kind: ViolationKind::MissingField,
		}
	}

	pub fn invalid_type(field: &str, expected: &str) -> Self {
		Self {
			field: field.to_string(),
			message: format!("\"{}\" must be a {}", field, expected),
			kind: ViolationKind::InvalidType,
		}
	}

	pub fn invalid_value(field: &str, reason: &str) -> Self {
		Self {
			field: field.to_string(),
			message: format!("\"{}\" {}", field, reason),
			kind: ViolationKind::InvalidValue,
		}
	}
}

/// Classification of a single webhook response against its originating request
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseClass {
	/// Schema-valid, request id matches, relevant amount non-zero
	Valid(Quote),

	/// Body failed schema validation; ordered field-level violations
	ValidationError(Vec<FieldViolation>),

	/// Schema-valid body answering a different request
	RequestIdMismatch { received: String },

	/// Non-2xx outcome, or an explicit zero-amount decline
	NonQuote,
}

impl ResponseClass {
	/// Stable tag carried on analytics events
	pub fn tag(&self) -> &'static str {
		match self {
			Self::Valid(_) => "VALID",
			Self::ValidationError(_) => "VALIDATION_ERROR",
			Self::RequestIdMismatch { .. } => "REQUEST_ID_MISMATCH",
			Self::NonQuote => "NON_QUOTE",
		}
	}

	pub fn is_valid(&self) -> bool {
		matches!(self, Self::Valid(_))
	}
}
