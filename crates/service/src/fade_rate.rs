//! Batch fade-rate aggregation
//!
//! Rolls per-address fill statistics up to logical fillers, producing the
//! fade-rate mapping operators feed back into circuit-breaker configuration.
//! The write-back itself is external.

use std::collections::HashMap;
use tracing::warn;

use rfq_types::FadeRow;

/// Aggregate per-address fill statistics into per-filler fade rates
///
/// Rows for addresses missing from the map are skipped with a warning. A
/// filler whose summed total is zero is omitted rather than producing a
/// NaN/infinite rate. Output is independent of input row order.
pub fn calculate_filler_fade_rates(
	rows: &[FadeRow],
	address_to_filler: &HashMap<String, String>,
) -> HashMap<String, f64> {
	let mut totals: HashMap<String, (u64, u64)> = HashMap::new();

	for row in rows {
		let filler = match address_to_filler.get(&row.filler_address) {
			Some(filler) => filler,
			None => {
				warn!(
					"No filler mapping for address '{}', skipping {} quotes",
					row.filler_address, row.total_quotes
				);
				continue;
			},
		};

		let entry = totals.entry(filler.clone()).or_insert((0, 0));
		entry.0 += row.total_quotes;
		entry.1 += row.faded_quotes;
	}

	totals
		.into_iter()
		.filter(|(_, (total, _))| *total > 0)
		.map(|(filler, (total, faded))| (filler, faded as f64 / total as f64))
		.collect()
}
