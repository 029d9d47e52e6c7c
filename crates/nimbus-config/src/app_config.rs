//! Application configuration structures.

use nimbus_core::Granularity;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Redis configuration.
    #[serde(default)]
    pub redis: RedisConfig,

    /// Upstream weather provider configuration.
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Cache TTL configuration.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "nimbus".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// REST server host.
    pub host: String,
    /// REST server port.
    pub port: u16,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Enable CORS.
    pub cors_enabled: bool,
    /// CORS allowed origins.
    pub cors_origins: Vec<String>,
    /// Global rate limit, requests per minute.
    pub rate_limit_per_minute: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 30,
            cors_enabled: true,
            cors_origins: vec!["*".to_string()],
            rate_limit_per_minute: 100,
        }
    }
}

impl ServerConfig {
    /// Returns the server bind address.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the request timeout as a Duration.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Redis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Redis URL.
    pub url: String,
    /// Connection pool size.
    pub pool_size: u32,
    /// Enable Redis (can be disabled for local development; the proxy then
    /// fetches upstream on every request).
    pub enabled: bool,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            pool_size: 10,
            enabled: true,
        }
    }
}

/// Upstream weather provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the provider's timeline endpoint; the location is
    /// appended as a path segment.
    pub base_url: String,
    /// Provider API key.
    pub api_key: String,
    /// Unit group query parameter (`us` or `metric`).
    pub unit_group: String,
    /// Timeout applied to each upstream fetch, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url:
                "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline"
                    .to_string(),
            api_key: String::new(),
            unit_group: "us".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl UpstreamConfig {
    /// Returns the upstream fetch timeout as a Duration.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Cache TTL configuration, one duration per granularity.
///
/// Daily forecasts change far less often than current conditions, so each
/// granularity carries its own TTL rather than one shared scalar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// TTL for current conditions, in seconds.
    pub current_ttl_secs: u64,
    /// TTL for daily forecasts, in seconds.
    pub daily_ttl_secs: u64,
    /// TTL for hourly forecasts, in seconds.
    pub hourly_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            current_ttl_secs: 30 * 60,
            daily_ttl_secs: 6 * 60 * 60,
            hourly_ttl_secs: 60 * 60,
        }
    }
}

impl CacheConfig {
    /// Returns the TTL for the given granularity.
    #[must_use]
    pub const fn ttl_for(&self, granularity: Granularity) -> Duration {
        let secs = match granularity {
            Granularity::Current => self.current_ttl_secs,
            Granularity::Daily => self.daily_ttl_secs,
            Granularity::Hourly => self.hourly_ttl_secs,
        };
        Duration::from_secs(secs)
    }
}
