//! Request completion logging.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;

/// Emits one completion line per request.
///
/// The route is logged as the matched pattern (`/api/weather/conditions/:location`)
/// rather than the raw path, so log lines aggregate per endpoint instead of
/// per location; the raw path is used for requests that hit the 404 fallback.
pub async fn request_logging(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let route = request.extensions().get::<MatchedPath>().map_or_else(
        || request.uri().path().to_string(),
        |matched| matched.as_str().to_string(),
    );

    let start = Instant::now();
    let response = next.run(request).await;
    let latency = start.elapsed();

    info!(
        target: "http",
        method = %method,
        route = %route,
        status = response.status().as_u16(),
        latency_ms = latency.as_millis() as u64,
        "Request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::{middleware, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_response_passes_through_unchanged() {
        let app = Router::new()
            .route("/conditions/:location", get(|| async { "ok" }))
            .layer(middleware::from_fn(request_logging));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/conditions/seattle")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unmatched_route_still_logs_and_responds() {
        let app = Router::new()
            .route("/conditions/:location", get(|| async { "ok" }))
            .layer(middleware::from_fn(request_logging));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nope")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
