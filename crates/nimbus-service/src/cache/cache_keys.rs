//! Cache key generators for consistent key naming.
//!
//! Identical (granularity, location) pairs must always map to the identical
//! key, so both the read and write paths go through [`conditions`].

use nimbus_core::{normalize_location, Granularity};

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "weather";

/// Generate the cache key for a weather conditions lookup.
#[must_use]
pub fn conditions(granularity: Granularity, location: &str) -> String {
    format!(
        "{}:{}:{}",
        CACHE_PREFIX,
        granularity.as_str(),
        normalize_location(location)
    )
}
