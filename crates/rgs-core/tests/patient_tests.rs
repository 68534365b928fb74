//! Patient validation and projection properties.

use proptest::prelude::*;
use rgs_core::models::field;
use rgs_core::{Category, MetaData, Patient, PatientError, ReferenceEnum, TimeZone};

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

/// Patient with only the selected required fields filled in.
///
/// Bits: 0 firstName, 1 phone, 2 externalId, 3 metadata, 4 timezone.
fn partial_patient(mask: u8, category: &str) -> Patient {
    let mut patient = Patient::new();
    patient.set_category_key(category);
    if mask & 1 != 0 {
        patient.set_first_name("Ivan");
    }
    if mask & 2 != 0 {
        patient.set_phone("+7");
    }
    if mask & 4 != 0 {
        patient.set_external_id(1);
    }
    if mask & 8 != 0 {
        patient.set_metadata(MetaData::new(1, 2));
    }
    if mask & 16 != 0 {
        patient.set_timezone(TimeZone::from_minutes(180));
    }
    patient
}

fn expected_missing(mask: u8) -> Vec<&'static str> {
    [
        (1, field::FIRST_NAME),
        (2, field::PHONE),
        (4, field::EXTERNAL_ID),
        (8, field::METADATA),
        (16, field::TIMEZONE),
    ]
    .into_iter()
    .filter(|(bit, _)| mask & bit == 0)
    .map(|(_, name)| name)
    .collect()
}

#[test]
fn test_scenario_valid_patient() {
    let patient = make_patient();
    assert!(patient.validate().is_valid());

    let wire = patient.to_wire().unwrap();
    let expected = serde_json::json!({
        "categoryKey": "diabetic",
        "firstName": "Ivan",
        "phone": "+7 (904) 999-99-99",
        "externalId": -100000000,
        "metadata": {"productId": 13, "contractId": 10293},
        "timezone": 120,
        "active": true,
        "monitoringEnabled": true
    });
    assert_eq!(serde_json::Value::Object(wire), expected);
}

#[test]
fn test_scenario_empty_category() {
    let mut patient = make_patient();
    patient.set_category_key("");

    let report = patient.validate();
    assert!(!report.is_valid());
    assert_eq!(
        report.errors().fields().collect::<Vec<_>>(),
        vec![field::CATEGORY_KEY]
    );
}

#[test]
fn test_validation_fault_carries_all_errors() {
    let mut patient = Patient::new();
    patient.set_category_key("not-a-real-category");
    patient.set_first_name("Ivan");

    let err = patient.to_json().unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert_eq!(errors.len(), 5);
    assert!(errors.contains(field::CATEGORY_KEY));
    assert!(errors.contains(field::TIMEZONE));
    assert!(!errors.contains(field::FIRST_NAME));
    assert!(err.to_string().starts_with("Patient has validation errors: "));
}

#[test]
fn test_fixing_fields_makes_projection_succeed() {
    let mut patient = make_patient();
    patient.set_category_key("unknown");
    assert!(matches!(patient.to_wire(), Err(PatientError::Validation(_))));

    patient.set_category_key(Category::Cardiac.code());
    let wire = patient.to_wire().unwrap();
    assert_eq!(wire["categoryKey"], "cardiac");
}

proptest! {
    #[test]
    fn prop_missing_fields_are_reported(mask in 0u8..32) {
        let errors = partial_patient(mask, "diabetic").errors();
        let fields: Vec<_> = errors.fields().collect();
        let mut expected = expected_missing(mask);
        expected.sort_unstable();
        prop_assert_eq!(fields, expected);
    }

    #[test]
    fn prop_unknown_category_reported_alongside(mask in 0u8..32, category in "[a-z-]{0,12}") {
        prop_assume!(!Category::contains(category.as_str()));
        let errors = partial_patient(mask, &category).errors();
        prop_assert!(errors.contains(field::CATEGORY_KEY));
        prop_assert_eq!(errors.len(), expected_missing(mask).len() + 1);
    }

    #[test]
    fn prop_validate_is_idempotent(mask in 0u8..32) {
        let patient = partial_patient(mask, "covid");
        prop_assert_eq!(patient.validate(), patient.validate());
    }

    #[test]
    fn prop_patronymic_presence(patronymic in proptest::option::of("[A-Za-z]{1,16}")) {
        let mut patient = make_patient();
        patient.set_patronymic(patronymic.clone());
        let wire = patient.to_wire().unwrap();
        match patronymic {
            Some(value) => {
                prop_assert_eq!(wire.get("patronymic"), Some(&serde_json::Value::String(value)));
            }
            None => {
                prop_assert!(!wire.contains_key("patronymic"));
            }
        }
        prop_assert!(!wire.contains_key("robotType"));
    }

    #[test]
    fn prop_projection_reflects_latest_phone(first in "[0-9]{5,11}", second in "[0-9]{5,11}") {
        let mut patient = make_patient();
        patient.set_phone(first.clone());
        let wire = patient.to_wire().unwrap();
        prop_assert_eq!(wire.get("phone"), Some(&serde_json::Value::String(first)));

        patient.set_phone(second.clone());
        let wire = patient.to_wire().unwrap();
        prop_assert_eq!(wire.get("phone"), Some(&serde_json::Value::String(second)));
    }
}
