//! Unified error types for all layers of the application.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of Nimbus.
///
/// Only `Validation` and `Upstream` ever reach the response boundary; cache
/// errors are absorbed by the orchestrator, which downgrades them to a
/// forced upstream fetch.
#[derive(Error, Debug)]
pub enum NimbusError {
    /// Request validation error (missing or empty location).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Upstream weather provider failure: unreachable, non-success status,
    /// or unparseable payload. The detail is for logs only.
    #[error("Upstream provider error: {0}")]
    Upstream(String),

    /// Cache store failure. Never surfaced to callers.
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Operation timed out.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NimbusError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::RateLimitExceeded => 429,
            Self::Upstream(_)
            | Self::Cache(_)
            | Self::Configuration(_)
            | Self::Timeout(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Upstream(_) => "UPSTREAM_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the message safe to put in a user-visible response.
    ///
    /// Validation messages are user-correctable and pass through as-is.
    /// Everything else is replaced with a generic message; the underlying
    /// detail belongs in the log, never in the response body.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Upstream(_) | Self::Timeout(_) => "Error fetching weather details".to_string(),
            Self::RateLimitExceeded => "Too many requests".to_string(),
            Self::Cache(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => {
                "Server error".to_string()
            }
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an upstream provider error.
    #[must_use]
    pub fn upstream<T: Into<String>>(message: T) -> Self {
        Self::Upstream(message.into())
    }

    /// Creates a cache error.
    #[must_use]
    pub fn cache<T: Into<String>>(message: T) -> Self {
        Self::Cache(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is retriable by the caller.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Upstream(_) | Self::Cache(_) | Self::Timeout(_))
    }
}

impl From<serde_json::Error> for NimbusError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(NimbusError::validation("missing location").status_code(), 400);
        assert_eq!(NimbusError::upstream("connection refused").status_code(), 500);
        assert_eq!(NimbusError::cache("pool exhausted").status_code(), 500);
        assert_eq!(NimbusError::RateLimitExceeded.status_code(), 429);
        assert_eq!(NimbusError::Timeout("upstream".to_string()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(NimbusError::validation("bad input").error_code(), "VALIDATION_ERROR");
        assert_eq!(NimbusError::upstream("boom").error_code(), "UPSTREAM_ERROR");
        assert_eq!(NimbusError::cache("down").error_code(), "CACHE_ERROR");
        assert_eq!(NimbusError::internal("oops").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_user_message_passes_validation_through() {
        let err = NimbusError::validation("Please specify location");
        assert_eq!(err.user_message(), "Please specify location");
    }

    #[test]
    fn test_user_message_hides_upstream_detail() {
        let err = NimbusError::upstream("tcp connect error: 10.0.0.1:443");
        assert_eq!(err.user_message(), "Error fetching weather details");
        assert!(!err.user_message().contains("10.0.0.1"));
    }

    #[test]
    fn test_user_message_hides_internal_detail() {
        let err = NimbusError::cache("NOAUTH Authentication required");
        assert_eq!(err.user_message(), "Server error");
        let err = NimbusError::internal("stack trace here");
        assert_eq!(err.user_message(), "Server error");
    }

    #[test]
    fn test_retriable_errors() {
        assert!(NimbusError::upstream("503").is_retriable());
        assert!(NimbusError::cache("connection lost").is_retriable());
        assert!(!NimbusError::validation("bad input").is_retriable());
    }
}
