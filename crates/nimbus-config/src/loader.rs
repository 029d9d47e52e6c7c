//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, Environment, File};
use nimbus_core::{NimbusError, NimbusResult};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use url::Url;

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides (not committed)
    /// 4. Environment variables with `NIMBUS_` prefix (`__` nests sections,
    ///    e.g. `NIMBUS_UPSTREAM__API_KEY`)
    ///
    /// # Errors
    ///
    /// Returns `NimbusError::Configuration` when a source fails to parse or
    /// the resulting configuration is invalid.
    pub fn new(config_dir: impl Into<String>) -> NimbusResult<Self> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    ///
    /// # Errors
    ///
    /// See [`ConfigLoader::new`].
    pub fn from_default_location() -> NimbusResult<Self> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns `NimbusError::Configuration` when reloading fails; the
    /// previous configuration stays in effect.
    pub async fn reload(&self) -> NimbusResult<()> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> NimbusResult<AppConfig> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("NIMBUS_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        // 1. Load default configuration
        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        // 2. Load environment-specific configuration
        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        // 3. Load local overrides (not committed to version control)
        let local_path = format!("{}/local.toml", config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        // 4. Override with environment variables (NIMBUS_ prefix)
        builder = builder.add_source(
            Environment::with_prefix("NIMBUS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| NimbusError::Configuration(e.to_string()))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| NimbusError::Configuration(e.to_string()))?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration, failing fast on values that would only
    /// surface as runtime errors later.
    fn validate_config(config: &AppConfig) -> NimbusResult<()> {
        if config.upstream.base_url.is_empty() {
            return Err(NimbusError::Configuration(
                "Upstream base URL is required".to_string(),
            ));
        }

        Url::parse(&config.upstream.base_url).map_err(|e| {
            NimbusError::Configuration(format!("Invalid upstream base URL: {}", e))
        })?;

        if config.upstream.api_key.is_empty() {
            return Err(NimbusError::Configuration(
                "Upstream API key is required".to_string(),
            ));
        }

        if config.upstream.request_timeout_secs == 0 {
            return Err(NimbusError::Configuration(
                "Upstream request timeout must be positive".to_string(),
            ));
        }

        if config.redis.enabled {
            Url::parse(&config.redis.url)
                .map_err(|e| NimbusError::Configuration(format!("Invalid Redis URL: {}", e)))?;
        } else {
            warn!("Redis is disabled; every request will fetch upstream");
        }

        let ttls = [
            ("cache.current_ttl_secs", config.cache.current_ttl_secs),
            ("cache.daily_ttl_secs", config.cache.daily_ttl_secs),
            ("cache.hourly_ttl_secs", config.cache.hourly_ttl_secs),
        ];
        for (name, value) in ttls {
            if value == 0 {
                return Err(NimbusError::Configuration(format!(
                    "{} must be positive",
                    name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CacheConfig, UpstreamConfig};

    fn valid_config() -> AppConfig {
        AppConfig {
            upstream: UpstreamConfig {
                api_key: "test-key".to_string(),
                ..UpstreamConfig::default()
            },
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(ConfigLoader::validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_api_key_rejected() {
        let config = AppConfig::default();
        let err = ConfigLoader::validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn test_invalid_upstream_url_rejected() {
        let mut config = valid_config();
        config.upstream.base_url = "not a url".to_string();
        assert!(ConfigLoader::validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let mut config = valid_config();
        config.cache = CacheConfig {
            current_ttl_secs: 0,
            ..CacheConfig::default()
        };
        let err = ConfigLoader::validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("current_ttl_secs"));
    }

    #[test]
    fn test_disabled_redis_skips_url_check() {
        let mut config = valid_config();
        config.redis.enabled = false;
        config.redis.url = String::new();
        assert!(ConfigLoader::validate_config(&config).is_ok());
    }
}
