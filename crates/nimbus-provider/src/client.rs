//! HTTP client for the Visual Crossing timeline API.

use crate::{ProviderReport, ReportBody};
use async_trait::async_trait;
use nimbus_config::UpstreamConfig;
use nimbus_core::{Granularity, NimbusError, NimbusResult};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Abstraction over the upstream weather provider.
///
/// The orchestrator only needs one signal for any upstream problem, so
/// implementations collapse transport errors, non-success statuses, and
/// malformed payloads into `NimbusError::Upstream`.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches weather data for a location at the given granularity.
    async fn fetch(&self, location: &str, granularity: Granularity)
        -> NimbusResult<ProviderReport>;
}

/// Visual Crossing timeline API client.
pub struct VisualCrossingClient {
    client: Client,
    base_url: String,
    api_key: String,
    unit_group: String,
}

impl VisualCrossingClient {
    /// Creates a new client from the upstream configuration.
    ///
    /// # Errors
    ///
    /// Returns `NimbusError::Internal` when the HTTP client cannot be built.
    pub fn new(config: &UpstreamConfig) -> NimbusResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| NimbusError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config))
    }

    /// Creates a client with a caller-supplied `reqwest::Client`.
    #[must_use]
    pub fn with_client(client: Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            unit_group: config.unit_group.clone(),
        }
    }

    /// Builds the timeline request URL with the location as a path segment.
    fn url(&self, location: &str) -> NimbusResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| NimbusError::upstream(format!("Invalid upstream URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|()| NimbusError::upstream("Upstream URL cannot be a base"))?
            .push(location);
        Ok(url)
    }
}

#[async_trait]
impl WeatherProvider for VisualCrossingClient {
    async fn fetch(
        &self,
        location: &str,
        granularity: Granularity,
    ) -> NimbusResult<ProviderReport> {
        let url = self.url(location)?;
        debug!(location, %granularity, "Fetching weather from upstream");

        let response = self
            .client
            .get(url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("unitGroup", self.unit_group.as_str()),
                ("contentType", "json"),
                ("include", granularity.include_param()),
            ])
            .send()
            .await
            .map_err(|e| NimbusError::upstream(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NimbusError::upstream(format!(
                "Upstream returned status {}",
                status
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| NimbusError::upstream(format!("Malformed upstream payload: {}", e)))?;

        extract_report(&payload, granularity)
    }
}

/// Extracts the granularity-specific fields and the resolved address from a
/// raw timeline payload.
fn extract_report(payload: &Value, granularity: Granularity) -> NimbusResult<ProviderReport> {
    let resolved_address = payload
        .get("resolvedAddress")
        .and_then(Value::as_str)
        .ok_or_else(|| NimbusError::upstream("Upstream payload missing resolvedAddress"))?
        .to_string();

    let body = match granularity {
        Granularity::Current => {
            let conditions = payload
                .get("currentConditions")
                .and_then(Value::as_object)
                .ok_or_else(|| {
                    NimbusError::upstream("Upstream payload missing currentConditions")
                })?;
            ReportBody::Current(conditions.clone())
        }
        Granularity::Daily => {
            let days = payload
                .get("days")
                .and_then(Value::as_array)
                .ok_or_else(|| NimbusError::upstream("Upstream payload missing days"))?;
            ReportBody::Daily(days.clone())
        }
        Granularity::Hourly => {
            let days = payload
                .get("days")
                .and_then(Value::as_array)
                .ok_or_else(|| NimbusError::upstream("Upstream payload missing days"))?;
            // The provider nests hours under each day; flatten them.
            let hours = days
                .iter()
                .filter_map(|day| day.get("hours").and_then(Value::as_array))
                .flatten()
                .cloned()
                .collect();
            ReportBody::Hourly(hours)
        }
    };

    Ok(ProviderReport {
        resolved_address,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_current() {
        let payload = json!({
            "resolvedAddress": "Seattle, WA",
            "currentConditions": {"temp": 60, "humidity": 71.2}
        });
        let report = extract_report(&payload, Granularity::Current).expect("valid payload");
        assert_eq!(report.resolved_address, "Seattle, WA");
        match report.body {
            ReportBody::Current(fields) => assert_eq!(fields["temp"], json!(60)),
            other => panic!("expected current body, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_daily() {
        let payload = json!({
            "resolvedAddress": "Seattle, WA",
            "days": [{"datetime": "2026-08-23", "tempmax": 75}]
        });
        let report = extract_report(&payload, Granularity::Daily).expect("valid payload");
        match report.body {
            ReportBody::Daily(days) => assert_eq!(days.len(), 1),
            other => panic!("expected daily body, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_hourly_flattens_days() {
        let payload = json!({
            "resolvedAddress": "Seattle, WA",
            "days": [
                {"datetime": "2026-08-23", "hours": [{"datetime": "00:00:00"}, {"datetime": "01:00:00"}]},
                {"datetime": "2026-08-24", "hours": [{"datetime": "00:00:00"}]}
            ]
        });
        let report = extract_report(&payload, Granularity::Hourly).expect("valid payload");
        match report.body {
            ReportBody::Hourly(hours) => assert_eq!(hours.len(), 3),
            other => panic!("expected hourly body, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_resolved_address_is_upstream_failure() {
        let payload = json!({"currentConditions": {"temp": 60}});
        let err = extract_report(&payload, Granularity::Current).unwrap_err();
        assert!(matches!(err, NimbusError::Upstream(_)));
    }

    #[test]
    fn test_missing_section_is_upstream_failure() {
        let payload = json!({"resolvedAddress": "Seattle, WA"});
        for granularity in [Granularity::Current, Granularity::Daily, Granularity::Hourly] {
            let err = extract_report(&payload, granularity).unwrap_err();
            assert!(matches!(err, NimbusError::Upstream(_)));
        }
    }
}
