//! Incoming swap request model and its webhook wire payloads

use serde::{Deserialize, Serialize};

/// Direction of the requested trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
	ExactInput,
	ExactOutput,
}

/// A swap quote request as it enters the dispatcher
///
/// Immutable once constructed. The wire payloads sent to filler webhooks are
/// derived from it rather than mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
	/// Unique identifier for this request
	pub request_id: String,

	/// Chain the input token lives on
	pub token_in_chain_id: u64,

	/// Chain the output token lives on
	pub token_out_chain_id: u64,

	/// Requesting swapper address, when known
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub swapper: Option<String>,

	/// Input token address
	pub token_in: String,

	/// Output token address
	pub token_out: String,

	/// Trade amount (as string to preserve precision)
	pub amount: String,

	/// Trade direction
	#[serde(rename = "type")]
	pub trade_type: TradeType,

	/// Number of requested outputs
	pub num_outputs: u32,
}

impl QuoteRequest {
	/// Clean wire payload for a webhook call, tagged with a fresh quote id
	pub fn to_wire(&self, quote_id: &str) -> WireQuoteRequest {
		WireQuoteRequest {
			request_id: self.request_id.clone(),
			quote_id: quote_id.to_string(),
			token_in_chain_id: self.token_in_chain_id,
			token_out_chain_id: self.token_out_chain_id,
			token_in: self.token_in.clone(),
			token_out: self.token_out.clone(),
			amount: self.amount.clone(),
			trade_type: self.trade_type,
			num_outputs: self.num_outputs,
			swapper: self.swapper.clone(),
		}
	}

	/// Direction-reversed wire payload, used to probe fillers that quote by
	/// canonical token ordering rather than by declared direction
	pub fn to_opposing_wire(&self, quote_id: &str) -> WireQuoteRequest {
		let mut wire = self.to_wire(quote_id);
		std::mem::swap(&mut wire.token_in, &mut wire.token_out);
		std::mem::swap(&mut wire.token_in_chain_id, &mut wire.token_out_chain_id);
		wire
	}
}

/// JSON body POSTed to a filler webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireQuoteRequest {
	pub request_id: String,
	pub quote_id: String,
	pub token_in_chain_id: u64,
	pub token_out_chain_id: u64,
	pub token_in: String,
	pub token_out: String,
	pub amount: String,
	#[serde(rename = "type")]
	pub trade_type: TradeType,
	pub num_outputs: u32,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub swapper: Option<String>,
}
