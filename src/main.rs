//! RFQ Quoter runner
//!
//! Dispatches one quote request (JSON file given as the first argument) to the
//! endpoints configured in the config file and prints the resulting quotes.

use std::sync::Arc;

use rfq_quoter::{
	init_logging, load_config, log_startup, QuoteRequest, QuoterBuilder, StaticEndpointProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let settings = load_config()?;
	init_logging(&settings.logging);

	let endpoints = settings.endpoints.clone();
	log_startup(&settings, endpoints.len());

	let quoter = QuoterBuilder::new()
		.with_endpoint_provider(Arc::new(StaticEndpointProvider::new(endpoints)))
		.with_settings(settings)
		.build()?;

	let path = std::env::args()
		.nth(1)
		.ok_or("usage: rfq-quoter <request.json>")?;
	let request: QuoteRequest = rfq_quoter::serde_json::from_str(&std::fs::read_to_string(path)?)?;

	let quotes = quoter.quote(&request).await?;
	println!("{}", rfq_quoter::serde_json::to_string_pretty(&quotes)?);

	quoter.flush_analytics().await;
	Ok(())
}
