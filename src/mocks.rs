//! Shared fixtures for integration tests and demos
//!
//! Builders for requests, endpoint configurations, and the JSON bodies a
//! market-maker webhook would answer with.

use rfq_types::serde_json::{json, Value};
use rfq_types::{EndpointConfig, QuoteRequest, TradeType};

/// An EXACT_INPUT request on chain 1 with a known swapper
pub fn mock_request() -> QuoteRequest {
	QuoteRequest {
		request_id: "req-test-1".to_string(),
		token_in_chain_id: 1,
		token_out_chain_id: 1,
		swapper: Some("0x1111111111111111111111111111111111111111".to_string()),
		token_in: "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_string(),
		token_out: "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb".to_string(),
		amount: "1000000000000000000".to_string(),
		trade_type: TradeType::ExactInput,
		num_outputs: 1,
	}
}

/// Same request without a swapper, triggering the opposing-direction probe
pub fn mock_request_without_swapper() -> QuoteRequest {
	QuoteRequest {
		swapper: None,
		..mock_request()
	}
}

/// An endpoint quoting every chain
pub fn mock_endpoint(name: &str, url: &str, hash: &str) -> EndpointConfig {
	EndpointConfig::new(name, url, hash)
}

/// A well-formed quote response body echoing the incoming wire request
///
/// `incoming` is the JSON payload the webhook received; the echo keeps the
/// request id, quote id, and token direction consistent with it.
pub fn mock_quote_body(incoming: &Value, filler: &str) -> Value {
	json!({
		"amountOut": "990000000000000000",
		"amountIn": incoming["amount"].as_str().unwrap_or("1000000000000000000"),
		"tokenIn": incoming["tokenIn"],
		"tokenOut": incoming["tokenOut"],
		"chainId": incoming["tokenInChainId"],
		"requestId": incoming["requestId"],
		"quoteId": incoming["quoteId"],
		"swapper": incoming["swapper"],
		"filler": filler,
	})
}
