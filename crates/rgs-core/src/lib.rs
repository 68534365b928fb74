//! RGS Core Library
//!
//! Domain objects for the RGS chronic-monitoring API: patients, metrics
//! payloads and the reference registries their fields are checked against.
//!
//! # Flow
//!
//! ```text
//! setters → Patient ──validate()──► ValidationReport
//!              │
//!              └──to_wire()──► field map ──serde_json──► request body
//!                     │
//!                     └── PatientError::Validation(errors) when invalid
//! ```
//!
//! # Modules
//!
//! - [`enums`]: Reference registries (Category, MetricType, InitiatorType, UtcOffset)
//! - [`models`]: Value objects, validation results, response records

pub mod enums;
pub mod models;

pub use enums::{Category, InitiatorType, MetricType, ReferenceEnum, UtcOffset};
pub use models::{
    MetaData, MetricRange, MetricsPayload, MetricsRangesPayload, Patient, PatientRecord,
    TimeZone, ValidPatient, ValidationErrors, ValidationReport,
};

use thiserror::Error;

/// Patient projection and decoding errors.
#[derive(Error, Debug)]
pub enum PatientError {
    #[error("Patient has validation errors: {0}")]
    Validation(ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PatientError {
    /// Field errors carried by a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            PatientError::Validation(errors) => Some(errors),
            PatientError::Json(_) => None,
        }
    }
}

pub type PatientResult<T> = Result<T, PatientError>;
