//! Cache store trait for abstracted caching operations.

use async_trait::async_trait;
use nimbus_core::{NimbusError, NimbusResult};
use std::time::Duration;

/// Key-value cache store abstraction.
///
/// Connection-level failures surface as `NimbusError::Cache`, distinctly
/// from "key absent" (`Ok(None)`); the orchestrator absorbs the former.
///
/// Uses JSON strings for type-erased storage to maintain dyn-compatibility.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired. Expiry is
    /// the store's job: callers only ever see present or absent.
    async fn get_raw(&self, key: &str) -> NimbusResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> NimbusResult<()>;

    /// Check that the store connection is alive.
    async fn ping(&self) -> NimbusResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheExt: CacheStore {
    /// Get a typed value from the cache.
    ///
    /// A value that fails to decode is reported as a cache error, which the
    /// orchestrator treats the same as a miss.
    async fn get<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> NimbusResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json).map_err(|e| {
                    NimbusError::cache(format!("Failed to decode cached value for '{}': {}", key, e))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> NimbusResult<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| NimbusError::cache(format!("Failed to encode value for '{}': {}", key, e)))?;
        self.set_raw(key, &json, ttl).await
    }
}

// Blanket implementation for all CacheStore implementations
impl<T: CacheStore + ?Sized> CacheExt for T {}
