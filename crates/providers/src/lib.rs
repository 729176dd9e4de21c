//! RFQ Providers
//!
//! External decision inputs for the webhook quoter: endpoint, circuit-breaker
//! and compliance configuration providers, plus the analytics sink. Each
//! concern is a trait so the dispatcher stays independent of where the
//! configuration actually lives (S3, Redshift, a delivery stream, ...).

pub mod cache;
pub mod memory;
pub mod traits;

pub use cache::CachedEndpointProvider;
pub use memory::{
	MemoryAnalyticsSink, StaticCircuitBreakerProvider, StaticComplianceProvider,
	StaticEndpointProvider,
};
pub use traits::{
	derive_address_to_filler, AnalyticsSink, CircuitBreakerConfigProvider,
	ComplianceConfigProvider, EndpointConfigProvider,
};
