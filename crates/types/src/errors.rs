//! Error types for the quoting path

use thiserror::Error;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Result type for dispatcher operations
pub type QuoterResult<T> = Result<T, QuoterError>;

/// Errors raised by configuration providers and the analytics sink
#[derive(Error, Debug)]
pub enum ProviderError {
	#[error("failed to fetch configuration: {reason}")]
	Fetch { reason: String },

	#[error("failed to decode configuration: {0}")]
	Decode(#[from] serde_json::Error),

	#[error("provider unavailable: {reason}")]
	Unavailable { reason: String },
}

/// Errors that may fail an overall `quote` call
///
/// Per-endpoint outcomes (timeouts, schema violations, declines) are absorbed
/// into classification and never surface here.
#[derive(Error, Debug)]
pub enum QuoterError {
	#[error("provider error: {0}")]
	Provider(#[from] ProviderError),

	#[error("malformed endpoint configuration for '{name}': {reason}")]
	InvalidEndpoint { name: String, reason: String },
}
