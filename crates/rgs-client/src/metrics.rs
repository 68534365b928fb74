//! Metrics endpoints.
//!
//! The API proxies questionnaire data, so bodies are forwarded without
//! validation.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use rgs_core::{MetricType, MetricsPayload, MetricsRangesPayload};

use crate::config::ClientConfig;
use crate::patients::patient_path;
use crate::request::{ApiRequest, Method};
use crate::ClientResult;

/// Builds requests against `/api/v1/patient/{externalId}/metrics`.
pub struct MetricsRequests<'a> {
    config: &'a ClientConfig,
}

impl<'a> MetricsRequests<'a> {
    pub fn new(config: &'a ClientConfig) -> Self {
        Self { config }
    }

    /// Questionnaire data for a patient, grouped by `metric_type`, optionally
    /// starting at `from`.
    pub fn get(
        &self,
        external_id: i64,
        from: Option<DateTime<FixedOffset>>,
        metric_type: MetricType,
    ) -> ClientResult<ApiRequest> {
        let metric_type = metric_type.to_string();
        let from = from.map(|from| from.to_rfc3339_opts(SecondsFormat::Secs, false));

        let mut query = vec![("type", metric_type.as_str())];
        if let Some(from) = from.as_deref() {
            query.push(("from", from));
        }

        Ok(ApiRequest::new(self.config, Method::Get, &metrics_path(external_id))?.with_query(&query))
    }

    /// Add questionnaire data.
    pub fn create(&self, payload: &MetricsPayload) -> ClientResult<ApiRequest> {
        let body = serde_json::to_string(payload)?;
        Ok(ApiRequest::new(self.config, Method::Post, &metrics_path(payload.external_id()))?
            .with_json_body(body))
    }

    /// Overwrite questionnaire data at the given time.
    #[deprecated(note = "removed by RGS on 2020-05-12")]
    pub fn update(&self, payload: &MetricsPayload) -> ClientResult<ApiRequest> {
        let body = serde_json::to_string(payload)?;
        Ok(ApiRequest::new(self.config, Method::Put, &metrics_path(payload.external_id()))?
            .with_json_body(body))
    }

    /// Latest questionnaire data of a patient.
    pub fn last(&self, external_id: i64) -> ClientResult<ApiRequest> {
        let path = format!("{}/last", metrics_path(external_id));
        Ok(ApiRequest::new(self.config, Method::Get, &path)?)
    }

    /// Change the allowed bounds of some metrics.
    pub fn update_ranges(&self, payload: &MetricsRangesPayload) -> ClientResult<ApiRequest> {
        let body = serde_json::to_string(payload)?;
        let path = format!("{}/ranges", metrics_path(payload.external_id()));
        Ok(ApiRequest::new(self.config, Method::Put, &path)?.with_json_body(body))
    }
}

fn metrics_path(external_id: i64) -> String {
    format!("{}/metrics", patient_path(external_id))
}
