//! Application state for Axum handlers.

use nimbus_service::{CacheStore, WeatherService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<dyn WeatherService>,
    pub cache: Arc<dyn CacheStore>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(weather_service: Arc<dyn WeatherService>, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            weather_service,
            cache,
        }
    }
}
