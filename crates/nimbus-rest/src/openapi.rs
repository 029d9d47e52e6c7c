//! OpenAPI documentation configuration.

use crate::controllers::{HealthResponse, ReadinessResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the Nimbus weather API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nimbus Weather API",
        version = "1.0.0",
        description = "Read-through caching proxy for weather conditions",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Weather endpoints
        crate::controllers::weather_controller::current_conditions,
        crate::controllers::weather_controller::daily_conditions,
        crate::controllers::weather_controller::hourly_conditions,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "weather", description = "Weather conditions endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
