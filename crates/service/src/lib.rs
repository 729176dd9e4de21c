//! RFQ Service
//!
//! Core services for the RFQ webhook quoter: pre-dispatch endpoint filtering,
//! the concurrent webhook dispatcher, response classification, fire-and-forget
//! analytics recording, and the batch fade-rate aggregation.

pub mod analytics;
pub mod classifier;
pub mod fade_rate;
pub mod filter;
pub mod quoter;

pub use analytics::EventRecorder;
pub use classifier::classify;
pub use fade_rate::calculate_filler_fade_rates;
pub use filter::EndpointFilter;
pub use quoter::WebhookQuoter;
