//! TTL-cached endpoint configuration
//!
//! Wraps any [`EndpointConfigProvider`] with an explicit `{value, fetched_at,
//! ttl}` cache refreshed lazily on read. Constructed once and passed by
//! reference to the dispatcher; there is no module-level state.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

use crate::traits::{derive_address_to_filler, EndpointConfigProvider};
use rfq_types::{EndpointConfig, ProviderResult};

#[derive(Debug, Clone)]
struct CacheEntry {
	endpoints: Vec<EndpointConfig>,
	fetched_at: Instant,
}

impl CacheEntry {
	fn is_expired(&self, ttl: Duration) -> bool {
		self.fetched_at.elapsed() > ttl
	}
}

/// Lazily refreshed endpoint configuration cache
pub struct CachedEndpointProvider {
	inner: Arc<dyn EndpointConfigProvider>,
	ttl: Duration,
	entry: RwLock<Option<CacheEntry>>,
}

impl CachedEndpointProvider {
	pub fn new(inner: Arc<dyn EndpointConfigProvider>, ttl: Duration) -> Self {
		Self {
			inner,
			ttl,
			entry: RwLock::new(None),
		}
	}

	async fn fresh_endpoints(&self) -> ProviderResult<Vec<EndpointConfig>> {
		{
			let entry = self.entry.read().await;
			if let Some(cached) = entry.as_ref() {
				if !cached.is_expired(self.ttl) {
					return Ok(cached.endpoints.clone());
				}
			}
		}

		let mut entry = self.entry.write().await;
		// Another reader may have refreshed while we waited for the lock
		if let Some(cached) = entry.as_ref() {
			if !cached.is_expired(self.ttl) {
				return Ok(cached.endpoints.clone());
			}
		}

		let endpoints = self.inner.endpoints().await?;
		debug!(
			"Refreshed endpoint configuration cache: {} endpoints",
			endpoints.len()
		);
		*entry = Some(CacheEntry {
			endpoints: endpoints.clone(),
			fetched_at: Instant::now(),
		});
		Ok(endpoints)
	}
}

#[async_trait]
impl EndpointConfigProvider for CachedEndpointProvider {
	async fn endpoints(&self) -> ProviderResult<Vec<EndpointConfig>> {
		self.fresh_endpoints().await
	}

	async fn address_to_filler(&self) -> ProviderResult<HashMap<String, String>> {
		let endpoints = self.fresh_endpoints().await?;
		Ok(derive_address_to_filler(&endpoints))
	}
}
