//! Caching infrastructure for the orchestration layer.
//!
//! The cache is strictly an optimization: every failure mode here degrades
//! to "fetch upstream", never to "refuse the request".

pub mod cache_keys;
mod cache_store;
mod redis_cache;

pub use cache_store::{CacheExt, CacheStore};
pub use redis_cache::RedisCacheStore;
