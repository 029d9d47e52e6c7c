//! The response shape and the cached record.

use chrono::{DateTime, Utc};
use nimbus_provider::{ProviderReport, ReportBody};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The normalized weather payload returned to callers.
///
/// This is the single definition of the envelope's `data` shape: both live
/// fetches and cache hits pass through it, so the two are indistinguishable
/// to the caller. Provider fields are dynamic and carried flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// The upstream provider's canonical name for the queried location.
    #[serde(rename = "resolvedAddress")]
    pub resolved_address: String,

    /// Granularity-specific fields: the current-condition fields, or a
    /// `days` array, or an `hours` array.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl WeatherData {
    /// Shapes a provider report into the response form.
    #[must_use]
    pub fn from_report(report: ProviderReport) -> Self {
        let mut fields = match report.body {
            ReportBody::Current(conditions) => conditions,
            ReportBody::Daily(days) => {
                let mut map = Map::new();
                map.insert("days".to_string(), Value::Array(days));
                map
            }
            ReportBody::Hourly(hours) => {
                let mut map = Map::new();
                map.insert("hours".to_string(), Value::Array(hours));
                map
            }
        };

        // The top-level resolvedAddress wins over any same-named field the
        // provider nests inside the conditions block.
        fields.remove("resolvedAddress");

        Self {
            resolved_address: report.resolved_address,
            fields,
        }
    }
}

/// The serialized envelope stored in the cache.
///
/// Carries the capture timestamp alongside the payload. The timestamp stays
/// internal: responses built from a cached record expose only `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedRecord {
    /// The shaped payload, exactly as it is returned to callers.
    pub data: WeatherData,
    /// When the upstream fetch that produced this record completed.
    pub cached_at: DateTime<Utc>,
}

impl CachedRecord {
    /// Creates a record capturing the current time.
    #[must_use]
    pub fn new(data: WeatherData) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn current_report() -> ProviderReport {
        let conditions = json!({"temp": 60, "humidity": 71.2})
            .as_object()
            .expect("object literal")
            .clone();
        ProviderReport {
            resolved_address: "Seattle, WA".to_string(),
            body: ReportBody::Current(conditions),
        }
    }

    #[test]
    fn test_current_shape_flattens_fields() {
        let data = WeatherData::from_report(current_report());
        let value = serde_json::to_value(&data).expect("serializes");
        assert_eq!(
            value,
            json!({"temp": 60, "humidity": 71.2, "resolvedAddress": "Seattle, WA"})
        );
    }

    #[test]
    fn test_daily_shape_keeps_days_array() {
        let report = ProviderReport {
            resolved_address: "Seattle, WA".to_string(),
            body: ReportBody::Daily(vec![json!({"tempmax": 75})]),
        };
        let value = serde_json::to_value(WeatherData::from_report(report)).expect("serializes");
        assert_eq!(
            value,
            json!({"days": [{"tempmax": 75}], "resolvedAddress": "Seattle, WA"})
        );
    }

    #[test]
    fn test_outer_resolved_address_wins() {
        let conditions = json!({"temp": 60, "resolvedAddress": "nested"})
            .as_object()
            .expect("object literal")
            .clone();
        let report = ProviderReport {
            resolved_address: "Seattle, WA".to_string(),
            body: ReportBody::Current(conditions),
        };
        let value = serde_json::to_value(WeatherData::from_report(report)).expect("serializes");
        assert_eq!(value["resolvedAddress"], json!("Seattle, WA"));
    }

    #[test]
    fn test_cached_record_round_trip_preserves_data() {
        let data = WeatherData::from_report(current_report());
        let record = CachedRecord::new(data.clone());
        let json = serde_json::to_string(&record).expect("encodes");
        let decoded: CachedRecord = serde_json::from_str(&json).expect("decodes");
        assert_eq!(decoded.data, data);
    }
}
