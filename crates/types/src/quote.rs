//! Core Quote domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::request::QuoteRequest;

/// A validated quote returned by a filler
///
/// Only ever constructed from a webhook response that classified VALID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
	/// Identifier the filler attached to this quote
	pub quote_id: String,

	/// ID of the original request that produced this quote
	pub request_id: String,

	/// Chain ID where the swap occurs
	pub chain_id: u64,

	/// Input token address
	pub token_in: String,

	/// Output token address
	pub token_out: String,

	/// Input amount (as string to preserve precision)
	pub amount_in: String,

	/// Output amount (as string to preserve precision)
	pub amount_out: String,

	/// Swapper the quote is for, taken from the originating request
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub swapper: Option<String>,

	/// Logical filler identity that produced the quote
	pub filler: String,

	/// When the quote was received
	pub created_at: DateTime<Utc>,
}

impl Quote {
	/// Build a quote from a schema-valid webhook response body
	///
	/// The response's own swapper field is ignored: a null-swapper request must
	/// still surface the original request context to the caller.
	pub fn from_response(body: WireQuoteResponse, request: &QuoteRequest) -> Self {
		Self {
			quote_id: body.quote_id,
			request_id: body.request_id,
			chain_id: body.chain_id,
			token_in: body.token_in,
			token_out: body.token_out,
			amount_in: body.amount_in,
			amount_out: body.amount_out,
			swapper: request.swapper.clone(),
			filler: body.filler,
			created_at: Utc::now(),
		}
	}

	/// Whether this quote's direction exactly matches the request's declared one
	pub fn matches_direction(&self, request: &QuoteRequest) -> bool {
		self.token_in == request.token_in && self.token_out == request.token_out
	}
}

/// JSON body a filler webhook is expected to answer with
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireQuoteResponse {
	pub amount_out: String,
	pub amount_in: String,
	pub token_in: String,
	pub token_out: String,
	pub chain_id: u64,
	pub request_id: String,
	pub quote_id: String,
	pub filler: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub swapper: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::request::TradeType;

	#[test]
	fn quote_takes_swapper_from_request_not_response() {
		let request = QuoteRequest {
			request_id: "req-1".to_string(),
			token_in_chain_id: 1,
			token_out_chain_id: 1,
			swapper: Some("0xrequest-swapper".to_string()),
			token_in: "0xaaa".to_string(),
			token_out: "0xbbb".to_string(),
			amount: "100".to_string(),
			trade_type: TradeType::ExactInput,
			num_outputs: 1,
		};
		let body = WireQuoteResponse {
			amount_out: "99".to_string(),
			amount_in: "100".to_string(),
			token_in: "0xaaa".to_string(),
			token_out: "0xbbb".to_string(),
			chain_id: 1,
			request_id: "req-1".to_string(),
			quote_id: "q-1".to_string(),
			filler: "0xfiller".to_string(),
			swapper: Some("0xresponse-swapper".to_string()),
		};

		let quote = Quote::from_response(body, &request);
		assert_eq!(quote.swapper.as_deref(), Some("0xrequest-swapper"));
		assert!(quote.matches_direction(&request));
	}
}
