//! Patient records as returned by the API.

use serde::{Deserialize, Serialize};

use super::metadata::MetaData;
use super::patient::Patient;
use super::timezone::TimeZone;

/// Category as embedded in create/update responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRef {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Allowed bounds for one metric of a patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricRange {
    /// Metric key (e.g., "sys")
    pub key: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Key of the composite metric this one belongs to (e.g., "ad")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<String>,
    /// Lower bound, as sent by the API
    pub min_value: String,
    /// Upper bound, as sent by the API
    pub max_value: String,
}

impl MetricRange {
    /// Bounds for a metric, without display metadata.
    pub fn bounds(key: impl Into<String>, min_value: impl Into<String>, max_value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
            parent_key: None,
            min_value: min_value.into(),
            max_value: max_value.into(),
        }
    }
}

/// A patient as known to the RGS service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Server-side ID (absent from activation responses)
    #[serde(default)]
    pub id: Option<i64>,
    /// Category, in create/update responses
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Category key, when the response carries it flat
    #[serde(default)]
    pub category_key: Option<String>,
    pub first_name: String,
    #[serde(default)]
    pub patronymic: Option<String>,
    pub phone: String,
    pub external_id: i64,
    pub active: bool,
    pub monitoring_enabled: bool,
    pub metadata: MetaData,
    pub timezone: TimeZone,
    #[serde(default)]
    pub metrics_ranges: Vec<MetricRange>,
    #[serde(default)]
    pub robot_type: Option<String>,
}

impl PatientRecord {
    /// Decode a patient response body.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Category key in whichever form the response carried it.
    pub fn category_key(&self) -> Option<&str> {
        self.category_key
            .as_deref()
            .or_else(|| self.category.as_ref().map(|category| category.key.as_str()))
    }

    /// Editable patient for a follow-up update.
    pub fn into_patient(self) -> Patient {
        let mut patient = Patient::new();
        if let Some(key) = self.category_key() {
            patient.set_category_key(key);
        }
        patient.set_first_name(self.first_name);
        patient.set_patronymic(self.patronymic);
        patient.set_phone(self.phone);
        patient.set_external_id(self.external_id);
        patient.set_metadata(self.metadata);
        patient.set_timezone(self.timezone);
        patient.set_robot_type(self.robot_type);
        if !self.active {
            patient.deactivate();
        }
        if !self.monitoring_enabled {
            patient.disable_monitoring();
        }
        patient
    }
}
