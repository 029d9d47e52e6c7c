//! Cache-aside orchestrator implementation.

use crate::cache::{cache_keys, CacheExt, CacheStore};
use crate::dto::{CachedRecord, WeatherData};
use crate::weather_service::WeatherService;
use async_trait::async_trait;
use nimbus_config::CacheConfig;
use nimbus_core::{NimbusError, NimbusResult, WeatherQuery};
use nimbus_provider::WeatherProvider;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Cache-aside orchestrator.
///
/// Policy: the cache is an optimization, never a hard dependency. Every
/// cache failure (unreachable store, undecodable value) degrades to an
/// upstream fetch; the only hard failure mode is upstream unavailability,
/// since there is no other source of truth.
///
/// Concurrent misses for the same key each fetch upstream independently;
/// there is no single-flight collapse of the thundering herd.
pub struct WeatherServiceImpl {
    cache: Arc<dyn CacheStore>,
    provider: Arc<dyn WeatherProvider>,
    cache_config: CacheConfig,
    upstream_timeout: Duration,
}

impl WeatherServiceImpl {
    /// Creates a new orchestrator over the injected adapters.
    pub fn new(
        cache: Arc<dyn CacheStore>,
        provider: Arc<dyn WeatherProvider>,
        cache_config: CacheConfig,
        upstream_timeout: Duration,
    ) -> Self {
        Self {
            cache,
            provider,
            cache_config,
            upstream_timeout,
        }
    }

    /// Reads the cached record for a key, absorbing every cache-layer
    /// failure into a miss.
    async fn read_cache(&self, key: &str) -> Option<CachedRecord> {
        match self.cache.get::<CachedRecord>(key).await {
            Ok(Some(record)) => Some(record),
            Ok(None) => None,
            Err(e) => {
                warn!(key, error = %e, "Cache read failed; treating as miss");
                None
            }
        }
    }
}

#[async_trait]
impl WeatherService for WeatherServiceImpl {
    async fn conditions(&self, query: WeatherQuery) -> NimbusResult<WeatherData> {
        let granularity = query.granularity();
        let key = cache_keys::conditions(granularity, query.location());

        if let Some(record) = self.read_cache(&key).await {
            debug!(%key, cached_at = %record.cached_at, "Serving from cache");
            return Ok(record.data);
        }

        debug!(%key, "Cache miss; fetching upstream");
        let report = tokio::time::timeout(
            self.upstream_timeout,
            self.provider.fetch(query.location(), granularity),
        )
        .await
        .map_err(|_| {
            NimbusError::upstream(format!(
                "Upstream fetch timed out after {:?}",
                self.upstream_timeout
            ))
        })??;

        let data = WeatherData::from_report(report);

        // Best-effort write: the fetched data is valid to return whether or
        // not the store accepts it.
        let record = CachedRecord::new(data.clone());
        let ttl = self.cache_config.ttl_for(granularity);
        if let Err(e) = self.cache.set(&key, &record, ttl).await {
            warn!(%key, error = %e, "Cache write failed; returning fetched data");
        }

        Ok(data)
    }
}
