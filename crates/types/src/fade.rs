//! Per-address fill outcome statistics

use serde::{Deserialize, Serialize};

/// Fill statistics for one on-chain filler address
///
/// Rows are produced by the external fill-outcome ingestion process and
/// consumed by the fade-rate aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FadeRow {
	/// On-chain address the statistics are keyed by
	pub filler_address: String,

	/// Quotes this address returned over the reporting window
	pub total_quotes: u64,

	/// Quotes this address failed to honor
	pub faded_quotes: u64,
}

impl FadeRow {
	pub fn new(filler_address: impl Into<String>, total_quotes: u64, faded_quotes: u64) -> Self {
		Self {
			filler_address: filler_address.into(),
			total_quotes,
			faded_quotes,
		}
	}
}
