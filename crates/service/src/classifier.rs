//! Webhook response classification
//!
//! Validates a raw webhook response against the quote schema and the
//! originating request, producing exactly one of four outcomes: VALID,
//! VALIDATION_ERROR, REQUEST_ID_MISMATCH or NON_QUOTE. Violation messages and
//! field paths are kept stable for observability parity.

use serde_json::Value;

use rfq_types::{
	FieldViolation, Quote, QuoteRequest, RawWebhookResponse, ResponseClass, TradeType,
	WireQuoteResponse,
};

/// Classify one raw webhook response against its originating request
pub fn classify(raw: &RawWebhookResponse, request: &QuoteRequest) -> ResponseClass {
	// Timeouts and network errors carry status 0 and fall through here too
	if !(200..300).contains(&raw.status) {
		return ResponseClass::NonQuote;
	}

	let violations = validate_body(&raw.body);
	if !violations.is_empty() {
		return ResponseClass::ValidationError(violations);
	}

	let body: WireQuoteResponse = match serde_json::from_value(raw.body.clone()) {
		Ok(body) => body,
		// Unreachable after field validation, but never panic on wire data
		Err(e) => {
			return ResponseClass::ValidationError(vec![FieldViolation::invalid_type(
				"$",
				&format!("quote response ({})", e),
			)])
		},
	};

	if body.request_id != request.request_id {
		return ResponseClass::RequestIdMismatch {
			received: body.request_id,
		};
	}

	let relevant_amount = match request.trade_type {
		TradeType::ExactInput => &body.amount_out,
		TradeType::ExactOutput => &body.amount_in,
	};
	if is_zero_amount(relevant_amount) {
		// The filler answered but explicitly declined to quote
		return ResponseClass::NonQuote;
	}

	ResponseClass::Valid(Quote::from_response(body, request))
}

/// Validate the quote response schema, collecting ordered field violations
fn validate_body(body: &Value) -> Vec<FieldViolation> {
	let obj = match body.as_object() {
		Some(obj) => obj,
		None => return vec![FieldViolation::invalid_type("$", "JSON object")],
	};

	let mut violations = Vec::new();

	check_amount(obj, "amountOut", &mut violations);
	check_amount(obj, "amountIn", &mut violations);
	check_string(obj, "tokenIn", &mut violations);
	check_string(obj, "tokenOut", &mut violations);
	match obj.get("chainId") {
		None => violations.push(FieldViolation::missing("chainId")),
		Some(v) if v.as_u64().is_none() => {
			violations.push(FieldViolation::invalid_type("chainId", "positive integer"))
		},
		Some(_) => {},
	}
	check_string(obj, "requestId", &mut violations);
	check_string(obj, "quoteId", &mut violations);
	check_string(obj, "filler", &mut violations);
	// swapper is optional but must be a string when present
	if let Some(v) = obj.get("swapper") {
		if !v.is_null() && v.as_str().is_none() {
			violations.push(FieldViolation::invalid_type("swapper", "string"));
		}
	}

	violations
}

fn check_string(
	obj: &serde_json::Map<String, Value>,
	field: &str,
	violations: &mut Vec<FieldViolation>,
) {
	match obj.get(field) {
		None => violations.push(FieldViolation::missing(field)),
		Some(v) => match v.as_str() {
			Some(s) if s.is_empty() => {
				violations.push(FieldViolation::invalid_value(field, "must not be empty"))
			},
			Some(_) => {},
			None => violations.push(FieldViolation::invalid_type(field, "string")),
		},
	}
}

fn check_amount(
	obj: &serde_json::Map<String, Value>,
	field: &str,
	violations: &mut Vec<FieldViolation>,
) {
	match obj.get(field) {
		None => violations.push(FieldViolation::missing(field)),
		Some(v) => match v.as_str() {
			Some(s) if !is_numeric_amount(s) => violations.push(FieldViolation::invalid_value(
				field,
				"must be a base-10 integer string",
			)),
			Some(_) => {},
			None => violations.push(FieldViolation::invalid_type(field, "string")),
		},
	}
}

fn is_numeric_amount(s: &str) -> bool {
	!s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A numeric amount string is zero iff it trims to nothing but zeros
fn is_zero_amount(s: &str) -> bool {
	is_numeric_amount(s) && s.bytes().all(|b| b == b'0')
}
