//! The validated weather request.

use crate::{Granularity, NimbusError, NimbusResult};
use serde::{Deserialize, Serialize};

/// An immutable, validated weather request.
///
/// Construction is the validation boundary: an empty or whitespace-only
/// location never reaches the cache or the upstream client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherQuery {
    location: String,
    granularity: Granularity,
}

impl WeatherQuery {
    /// Creates a new query, rejecting blank locations.
    ///
    /// # Errors
    ///
    /// Returns `NimbusError::Validation` when the location is empty or
    /// whitespace-only.
    pub fn new(location: impl Into<String>, granularity: Granularity) -> NimbusResult<Self> {
        let location = location.into();
        if location.trim().is_empty() {
            return Err(NimbusError::validation("Please specify location"));
        }
        Ok(Self {
            location,
            granularity,
        })
    }

    /// The free-text location as the caller supplied it.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The requested time resolution.
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }
}
