//! Patient value object.
//!
//! A `Patient` is filled in through setters in any order and checked only
//! when it is validated or projected to its wire form. Projection is
//! all-or-nothing: either every required field is present and the category
//! is known, or the caller gets the full list of problems.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::metadata::MetaData;
use super::timezone::TimeZone;
use super::validation::{ValidationErrors, ValidationReport};
use crate::enums::{Category, ReferenceEnum};
use crate::{PatientError, PatientResult};

/// Wire names of the patient fields.
pub mod field {
    pub const CATEGORY_KEY: &str = "categoryKey";
    pub const FIRST_NAME: &str = "firstName";
    pub const PATRONYMIC: &str = "patronymic";
    pub const PHONE: &str = "phone";
    pub const EXTERNAL_ID: &str = "externalId";
    pub const METADATA: &str = "metadata";
    pub const TIMEZONE: &str = "timezone";
    pub const ACTIVE: &str = "active";
    pub const MONITORING_ENABLED: &str = "monitoringEnabled";
    pub const ROBOT_TYPE: &str = "robotType";
}

/// Message for a category that is missing or not in the registry.
pub const INVALID_CATEGORY_MESSAGE: &str = "Invalid patient category value.";

/// A patient as sent to the RGS monitoring service on create/update.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    /// Category code, checked against [`Category`]
    category_key: Option<String>,
    /// First name
    first_name: Option<String>,
    /// Patronymic (optional, omitted from the wire when unset)
    patronymic: Option<String>,
    /// Contact phone number
    phone: Option<String>,
    /// Caller-assigned patient ID
    external_id: Option<i64>,
    /// Partner product and contract
    metadata: Option<MetaData>,
    /// Local time zone
    timezone: Option<TimeZone>,
    /// Patient is active in the monitoring system
    active: bool,
    /// Push/robot calls are enabled for the patient
    monitoring_enabled: bool,
    /// Robot placing the calls (optional, omitted from the wire when unset)
    robot_type: Option<String>,
}

impl Default for Patient {
    fn default() -> Self {
        Self::new()
    }
}

impl Patient {
    /// Create an empty patient, active and with monitoring enabled.
    pub fn new() -> Self {
        Self {
            category_key: None,
            first_name: None,
            patronymic: None,
            phone: None,
            external_id: None,
            metadata: None,
            timezone: None,
            active: true,
            monitoring_enabled: true,
            robot_type: None,
        }
    }

    /// Decode a request-shaped JSON document.
    ///
    /// Every required field must be present and unknown fields are rejected.
    /// The category is not checked here; call [`Patient::validate`].
    pub fn from_json(json: &str) -> PatientResult<Self> {
        let document: PatientDocument = serde_json::from_str(json)?;
        Ok(document.into())
    }

    pub fn category_key(&self) -> Option<&str> {
        self.category_key.as_deref()
    }

    /// The category, when the key is set and known.
    pub fn category(&self) -> Option<Category> {
        self.category_key().and_then(Category::lookup)
    }

    pub fn set_category_key(&mut self, category_key: impl Into<String>) {
        self.category_key = Some(category_key.into());
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = Some(first_name.into());
    }

    pub fn patronymic(&self) -> Option<&str> {
        self.patronymic.as_deref()
    }

    pub fn set_patronymic(&mut self, patronymic: Option<String>) {
        self.patronymic = patronymic;
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = Some(phone.into());
    }

    pub fn external_id(&self) -> Option<i64> {
        self.external_id
    }

    pub fn set_external_id(&mut self, external_id: i64) {
        self.external_id = Some(external_id);
    }

    pub fn metadata(&self) -> Option<&MetaData> {
        self.metadata.as_ref()
    }

    pub fn set_metadata(&mut self, metadata: MetaData) {
        self.metadata = Some(metadata);
    }

    pub fn timezone(&self) -> Option<&TimeZone> {
        self.timezone.as_ref()
    }

    pub fn set_timezone(&mut self, timezone: TimeZone) {
        self.timezone = Some(timezone);
    }

    pub fn robot_type(&self) -> Option<&str> {
        self.robot_type.as_deref()
    }

    pub fn set_robot_type(&mut self, robot_type: Option<String>) {
        self.robot_type = robot_type;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_monitoring_enabled(&self) -> bool {
        self.monitoring_enabled
    }

    /// Activate the patient in the monitoring system.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Deactivate the patient in the monitoring system.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Turn on push/robot monitoring for the patient.
    pub fn enable_monitoring(&mut self) {
        self.monitoring_enabled = true;
    }

    /// Turn off push/robot monitoring for the patient.
    pub fn disable_monitoring(&mut self) {
        self.monitoring_enabled = false;
    }

    /// Check every field rule and report all failures at once.
    pub fn validate(&self) -> ValidationReport {
        match self.wire() {
            Ok(_) => ValidationReport::default(),
            Err(errors) => ValidationReport::new(errors),
        }
    }

    /// Errors of a fresh validation pass; empty for a valid patient.
    pub fn errors(&self) -> ValidationErrors {
        self.validate().into_errors()
    }

    /// Field map sent to the API.
    ///
    /// Recomputed from the current state on every call. `patronymic` and
    /// `robotType` are left out when unset.
    pub fn to_wire(&self) -> PatientResult<Map<String, Value>> {
        self.checked()?.to_wire()
    }

    /// The wire projection encoded as JSON.
    pub fn to_json(&self) -> PatientResult<String> {
        self.checked()?.to_json()
    }

    /// Validate and borrow the patient as a [`ValidPatient`].
    pub fn checked(&self) -> PatientResult<ValidPatient<'_>> {
        self.wire().map_err(|errors| {
            tracing::debug!(
                external_id = ?self.external_id,
                fields = %errors.fields().collect::<Vec<_>>().join(","),
                "patient rejected by validation"
            );
            PatientError::Validation(errors)
        })
    }

    fn wire(&self) -> Result<ValidPatient<'_>, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let category_key = match self.category_key() {
            Some(key) if Category::contains(key) => Some(key),
            _ => {
                errors.insert(field::CATEGORY_KEY, INVALID_CATEGORY_MESSAGE);
                None
            }
        };
        let first_name = errors.require(field::FIRST_NAME, self.first_name());
        let phone = errors.require(field::PHONE, self.phone());
        let external_id = errors.require(field::EXTERNAL_ID, self.external_id);
        let metadata = errors.require(field::METADATA, self.metadata);
        let timezone = errors.require(field::TIMEZONE, self.timezone);

        match (category_key, first_name, phone, external_id, metadata, timezone) {
            (
                Some(category_key),
                Some(first_name),
                Some(phone),
                Some(external_id),
                Some(metadata),
                Some(timezone),
            ) => Ok(ValidPatient {
                category_key,
                first_name,
                patronymic: self.patronymic(),
                phone,
                external_id,
                metadata,
                timezone,
                active: self.active,
                monitoring_enabled: self.monitoring_enabled,
                robot_type: self.robot_type(),
            }),
            _ => Err(errors),
        }
    }
}

/// A patient that passed validation, borrowed in wire shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidPatient<'a> {
    category_key: &'a str,
    first_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    patronymic: Option<&'a str>,
    phone: &'a str,
    external_id: i64,
    metadata: MetaData,
    timezone: TimeZone,
    active: bool,
    monitoring_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    robot_type: Option<&'a str>,
}

impl ValidPatient<'_> {
    pub fn external_id(&self) -> i64 {
        self.external_id
    }

    pub fn to_wire(&self) -> PatientResult<Map<String, Value>> {
        Ok(serde_json::from_value(serde_json::to_value(self)?)?)
    }

    pub fn to_json(&self) -> PatientResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Strict decoding target for [`Patient::from_json`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PatientDocument {
    category_key: String,
    first_name: String,
    patronymic: Option<String>,
    phone: String,
    external_id: i64,
    metadata: MetaData,
    timezone: TimeZone,
    #[serde(default = "enabled")]
    active: bool,
    #[serde(default = "enabled")]
    monitoring_enabled: bool,
    robot_type: Option<String>,
}

fn enabled() -> bool {
    true
}

impl From<PatientDocument> for Patient {
    fn from(document: PatientDocument) -> Self {
        Self {
            category_key: Some(document.category_key),
            first_name: Some(document.first_name),
            patronymic: document.patronymic,
            phone: Some(document.phone),
            external_id: Some(document.external_id),
            metadata: Some(document.metadata),
            timezone: Some(document.timezone),
            active: document.active,
            monitoring_enabled: document.monitoring_enabled,
            robot_type: document.robot_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_patient() -> Patient {
        let mut patient = Patient::new();
        patient.set_category_key("diabetic");
        patient.set_first_name("Ivan");
        patient.set_phone("+7 (904) 999-99-99");
        patient.set_external_id(-100_000_000);
        patient.set_metadata(MetaData::new(13, 10293));
        patient.set_timezone(TimeZone::from_minutes(120));
        patient
    }

    #[test]
    fn test_new_patient_defaults() {
        let patient = Patient::new();
        assert!(patient.is_active());
        assert!(patient.is_monitoring_enabled());
        assert!(patient.first_name().is_none());
        assert_eq!(patient, Patient::default());
    }

    #[test]
    fn test_valid_patient() {
        let patient = make_patient();
        let report = patient.validate();
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
        assert_eq!(patient.category(), Some(Category::Diabetic));
    }

    #[test]
    fn test_empty_patient_reports_every_field() {
        let errors = Patient::new().errors();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                field::CATEGORY_KEY,
                field::EXTERNAL_ID,
                field::FIRST_NAME,
                field::METADATA,
                field::PHONE,
                field::TIMEZONE,
            ]
        );
        assert_eq!(errors.get(field::CATEGORY_KEY), Some(INVALID_CATEGORY_MESSAGE));
        assert_eq!(
            errors.get(field::PHONE),
            Some("Property phone must not be empty.")
        );
    }

    #[test]
    fn test_unknown_category_only_error() {
        let mut patient = make_patient();
        patient.set_category_key("");
        let errors = patient.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(field::CATEGORY_KEY));
    }

    #[test]
    fn test_wire_projection_shape() {
        let wire = make_patient().to_wire().unwrap();
        let mut keys: Vec<_> = wire.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "active",
                "categoryKey",
                "externalId",
                "firstName",
                "metadata",
                "monitoringEnabled",
                "phone",
                "timezone",
            ]
        );
        assert_eq!(wire["externalId"], serde_json::json!(-100_000_000));
        assert_eq!(wire["metadata"], serde_json::json!({"productId": 13, "contractId": 10293}));
        assert_eq!(wire["timezone"], serde_json::json!(120));
        assert_eq!(wire["active"], serde_json::json!(true));
    }

    #[test]
    fn test_optional_fields_projected_when_set() {
        let mut patient = make_patient();
        patient.set_patronymic(Some("Ivanovich".into()));
        patient.set_robot_type(Some("voice".into()));
        let wire = patient.to_wire().unwrap();
        assert_eq!(wire["patronymic"], serde_json::json!("Ivanovich"));
        assert_eq!(wire["robotType"], serde_json::json!("voice"));

        patient.set_patronymic(None);
        assert!(!patient.to_wire().unwrap().contains_key("patronymic"));
    }

    #[test]
    fn test_projection_follows_mutation() {
        let mut patient = make_patient();
        assert_eq!(patient.to_wire().unwrap()["firstName"], serde_json::json!("Ivan"));

        patient.set_first_name("Petr");
        patient.deactivate();
        let wire = patient.to_wire().unwrap();
        assert_eq!(wire["firstName"], serde_json::json!("Petr"));
        assert_eq!(wire["active"], serde_json::json!(false));
    }

    #[test]
    fn test_projection_rejects_invalid() {
        let mut patient = make_patient();
        patient.set_category_key("not-a-real-category");
        match patient.to_wire() {
            Err(PatientError::Validation(errors)) => {
                assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field::CATEGORY_KEY]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(patient.to_json().is_err());
    }

    #[test]
    fn test_toggles() {
        let mut patient = make_patient();
        patient.deactivate();
        patient.deactivate();
        assert!(!patient.is_active());
        patient.activate();
        assert!(patient.is_active());

        patient.disable_monitoring();
        assert!(!patient.is_monitoring_enabled());
        patient.enable_monitoring();
        assert!(patient.is_monitoring_enabled());
        assert!(patient.is_active());
    }

    #[test]
    fn test_checked_view() {
        let patient = make_patient();
        let valid = patient.checked().unwrap();
        assert_eq!(valid.external_id(), -100_000_000);
        assert_eq!(valid.to_wire().unwrap(), patient.to_wire().unwrap());

        assert!(Patient::new().checked().is_err());
    }

    #[test]
    fn test_to_json_matches_wire() {
        let patient = make_patient();
        let json: Value = serde_json::from_str(&patient.to_json().unwrap()).unwrap();
        assert_eq!(json, Value::Object(patient.to_wire().unwrap()));
    }

    #[test]
    fn test_from_json() {
        let patient = Patient::from_json(
            r#"{
                "categoryKey": "diabetic",
                "firstName": "Ivan",
                "patronymic": "Ivanovich",
                "phone": "+7 (904) 999-99-99",
                "externalId": -100000000,
                "metadata": {"productId": 13, "contractId": 10293},
                "timezone": 120,
                "active": true,
                "monitoringEnabled": false
            }"#,
        )
        .unwrap();

        assert_eq!(patient.patronymic(), Some("Ivanovich"));
        assert_eq!(patient.external_id(), Some(-100_000_000));
        assert!(!patient.is_monitoring_enabled());
        assert!(patient.validate().is_valid());
    }

    #[test]
    fn test_from_json_is_strict() {
        // phone missing
        let missing = r#"{
            "categoryKey": "diabetic",
            "firstName": "Ivan",
            "externalId": 1,
            "metadata": {"productId": 13, "contractId": 10293},
            "timezone": 120
        }"#;
        assert!(matches!(Patient::from_json(missing), Err(PatientError::Json(_))));

        let unknown = r#"{
            "categoryKey": "diabetic",
            "firstName": "Ivan",
            "phone": "+7",
            "externalId": 1,
            "metadata": {"productId": 13, "contractId": 10293},
            "timezone": 120,
            "nickname": "Vanya"
        }"#;
        assert!(Patient::from_json(unknown).is_err());
    }
}
