//! RFQ Types
//!
//! Shared domain models for the RFQ webhook quoter.
//! This crate contains all domain models organized by business entity.

pub mod analytics;
pub mod classification;
pub mod endpoints;
pub mod errors;
pub mod fade;
pub mod quote;
pub mod request;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

pub use analytics::{AnalyticsEvent, AnalyticsEventType};
pub use classification::{FieldViolation, RawWebhookResponse, ResponseClass, ViolationKind};
pub use endpoints::{CircuitBreakerConfig, ComplianceConfig, EndpointConfig};
pub use errors::{ProviderError, ProviderResult, QuoterError, QuoterResult};
pub use fade::FadeRow;
pub use quote::{Quote, WireQuoteResponse};
pub use request::{QuoteRequest, TradeType, WireQuoteRequest};
