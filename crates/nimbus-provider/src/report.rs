//! The provider payload, reduced to the fields this service keeps.

use nimbus_core::Granularity;
use serde_json::{Map, Value};

/// A provider response reduced to one granularity plus the canonical
/// location name. Transient: consumed entirely within one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderReport {
    /// The provider's canonicalized name for the queried location.
    pub resolved_address: String,
    /// The granularity-specific payload.
    pub body: ReportBody,
}

/// Granularity-specific payload fields.
///
/// Provider condition fields are dynamic (temperature, humidity, icon, and
/// whatever else the provider adds), so they are carried as raw JSON rather
/// than a fixed struct.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportBody {
    /// Current observed conditions.
    Current(Map<String, Value>),
    /// Day-by-day forecast entries.
    Daily(Vec<Value>),
    /// Hour-by-hour forecast entries, flattened across days.
    Hourly(Vec<Value>),
}

impl ReportBody {
    /// The granularity this body belongs to.
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        match self {
            Self::Current(_) => Granularity::Current,
            Self::Daily(_) => Granularity::Daily,
            Self::Hourly(_) => Granularity::Hourly,
        }
    }
}
