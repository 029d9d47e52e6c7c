//! Weather conditions controller.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use nimbus_core::{Granularity, WeatherQuery};
use nimbus_service::WeatherData;
use tracing::debug;

/// Creates the weather conditions router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:location", get(current_conditions))
        .route("/:location/daily", get(daily_conditions))
        .route("/:location/hourly", get(hourly_conditions))
}

/// Get current weather conditions for a location.
#[utoipa::path(
    get,
    path = "/api/weather/conditions/{location}",
    tag = "weather",
    params(
        ("location" = String, Path, description = "Free-text location (city name, address, or coordinates)")
    ),
    responses(
        (status = 200, description = "Current conditions for the resolved location"),
        (status = 400, description = "Missing or empty location"),
        (status = 500, description = "Upstream provider failure")
    )
)]
pub async fn current_conditions(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> ApiResult<WeatherData> {
    conditions(state, location, Granularity::Current).await
}

/// Get the daily forecast for a location.
#[utoipa::path(
    get,
    path = "/api/weather/conditions/{location}/daily",
    tag = "weather",
    params(
        ("location" = String, Path, description = "Free-text location (city name, address, or coordinates)")
    ),
    responses(
        (status = 200, description = "Daily forecast for the resolved location"),
        (status = 400, description = "Missing or empty location"),
        (status = 500, description = "Upstream provider failure")
    )
)]
pub async fn daily_conditions(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> ApiResult<WeatherData> {
    conditions(state, location, Granularity::Daily).await
}

/// Get the hourly forecast for a location.
#[utoipa::path(
    get,
    path = "/api/weather/conditions/{location}/hourly",
    tag = "weather",
    params(
        ("location" = String, Path, description = "Free-text location (city name, address, or coordinates)")
    ),
    responses(
        (status = 200, description = "Hourly forecast for the resolved location"),
        (status = 400, description = "Missing or empty location"),
        (status = 500, description = "Upstream provider failure")
    )
)]
pub async fn hourly_conditions(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> ApiResult<WeatherData> {
    conditions(state, location, Granularity::Hourly).await
}

/// Shared handler body: all three granularities follow the same path.
async fn conditions(
    state: AppState,
    location: String,
    granularity: Granularity,
) -> ApiResult<WeatherData> {
    debug!(%granularity, %location, "Weather conditions request");

    let query = WeatherQuery::new(location, granularity)?;
    let data = state.weather_service.conditions(query).await?;
    ok(data)
}
