//! Time resolution of requested weather data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The time resolution of a weather request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Current observed conditions.
    Current,
    /// Day-by-day forecast.
    Daily,
    /// Hour-by-hour forecast.
    Hourly,
}

impl Granularity {
    /// Canonical name, used in cache keys and log lines.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Daily => "daily",
            Self::Hourly => "hourly",
        }
    }

    /// Value of the upstream provider's `include` selector.
    #[must_use]
    pub const fn include_param(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Daily => "days",
            Self::Hourly => "hours",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
