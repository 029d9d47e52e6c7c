//! Server wiring: adapter construction, dependency injection, and graceful
//! shutdown.
//!
//! The cache pool and the upstream client are built once here and injected
//! into the orchestrator by constructor; there is no ambient global state.
//! Dropping the pool on shutdown releases the Redis connections.

use nimbus_config::AppConfig;
use nimbus_core::{NimbusError, NimbusResult};
use nimbus_provider::{VisualCrossingClient, WeatherProvider};
use nimbus_rest::{create_router, AppState};
use nimbus_service::{CacheStore, RedisCacheStore, WeatherService, WeatherServiceImpl};
use std::sync::Arc;
use tokio::signal;
use tracing::info;

/// Builds the application and serves it until a shutdown signal arrives.
pub async fn run(config: AppConfig) -> NimbusResult<()> {
    let cache = build_cache(&config)?;
    let provider: Arc<dyn WeatherProvider> = Arc::new(VisualCrossingClient::new(&config.upstream)?);

    let weather_service: Arc<dyn WeatherService> = Arc::new(WeatherServiceImpl::new(
        cache.clone(),
        provider,
        config.cache.clone(),
        config.upstream.request_timeout(),
    ));

    let state = AppState::new(weather_service, cache);
    let router = create_router(state, &config.server);

    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| NimbusError::Internal(format!("Failed to bind REST: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| NimbusError::Internal(format!("REST server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Creates the Redis-backed cache store, or a disabled one when Redis is
/// turned off in configuration.
fn build_cache(config: &AppConfig) -> NimbusResult<Arc<dyn CacheStore>> {
    if !config.redis.enabled {
        info!("Redis disabled; running without a cache");
        return Ok(Arc::new(RedisCacheStore::disabled()));
    }

    let mut redis_cfg = deadpool_redis::Config::from_url(&config.redis.url);
    redis_cfg.pool = Some(deadpool_redis::PoolConfig::new(
        config.redis.pool_size as usize,
    ));

    let pool = redis_cfg
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .map_err(|e| NimbusError::Cache(format!("Failed to create Redis pool: {}", e)))?;

    info!(
        pool_size = config.redis.pool_size,
        "Redis cache pool created"
    );
    Ok(Arc::new(RedisCacheStore::new(Arc::new(pool))))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
