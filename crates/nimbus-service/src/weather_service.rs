//! Weather service trait definition.

use crate::dto::WeatherData;
use async_trait::async_trait;
use nimbus_core::{NimbusResult, WeatherQuery};

/// The cache-aside weather lookup service.
#[async_trait]
pub trait WeatherService: Send + Sync {
    /// Resolves a weather query: from the cache when fresh data exists,
    /// otherwise from the upstream provider (populating the cache).
    ///
    /// Cache hits and misses return the identical payload shape.
    async fn conditions(&self, query: WeatherQuery) -> NimbusResult<WeatherData>;
}
