//! Metrics payloads.
//!
//! Questionnaire data is forwarded to the API as-is; only the patient it
//! belongs to is typed, since it routes the request.

use serde::Serialize;
use serde_json::{Map, Value};

use super::record::MetricRange;

/// Questionnaire answers for one patient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsPayload {
    #[serde(skip)]
    external_id: i64,
    #[serde(flatten)]
    data: Map<String, Value>,
}

impl MetricsPayload {
    pub fn new(external_id: i64, data: Map<String, Value>) -> Self {
        Self { external_id, data }
    }

    /// Add or replace one top-level field of the body.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn external_id(&self) -> i64 {
        self.external_id
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }
}

/// New allowed bounds for some of a patient's metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRangesPayload {
    #[serde(skip)]
    external_id: i64,
    metrics_ranges: Vec<MetricRange>,
}

impl MetricsRangesPayload {
    pub fn new(external_id: i64) -> Self {
        Self {
            external_id,
            metrics_ranges: Vec::new(),
        }
    }

    pub fn with_range(mut self, range: MetricRange) -> Self {
        self.metrics_ranges.push(range);
        self
    }

    pub fn external_id(&self) -> i64 {
        self.external_id
    }

    pub fn ranges(&self) -> &[MetricRange] {
        &self.metrics_ranges
    }
}
