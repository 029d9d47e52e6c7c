//! Global rate limiting middleware.

use crate::responses::AppError;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{
    clock::DefaultClock,
    middleware::NoOpMiddleware,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter as GovernorRateLimiter,
};
use nimbus_core::NimbusError;
use std::num::NonZeroU32;
use std::sync::Arc;

/// Process-wide rate limiter shared across handlers.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl RateLimiter {
    /// Creates a rate limiter with requests per minute.
    #[must_use]
    pub fn per_minute(requests: u32) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(requests).unwrap_or(NonZeroU32::MIN));
        let limiter = Arc::new(GovernorRateLimiter::direct(quota));
        Self { limiter }
    }

    /// Checks if a request is allowed (non-blocking).
    ///
    /// # Errors
    ///
    /// Returns `NimbusError::RateLimitExceeded` when the quota is spent.
    pub fn check(&self) -> Result<(), NimbusError> {
        self.limiter
            .check()
            .map_err(|_| NimbusError::RateLimitExceeded)
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter").finish_non_exhaustive()
    }
}

/// Rate limiting middleware: rejects with 429 once the quota is spent.
pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if let Err(e) = limiter.check() {
        return AppError(e).into_response();
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limiter_allows_requests() {
        let limiter = RateLimiter::per_minute(10);
        assert!(limiter.check().is_ok());
    }

    #[test]
    fn test_rate_limiter_rejects_when_quota_spent() {
        let limiter = RateLimiter::per_minute(1);
        assert!(limiter.check().is_ok());
        assert!(matches!(
            limiter.check(),
            Err(NimbusError::RateLimitExceeded)
        ));
    }
}
