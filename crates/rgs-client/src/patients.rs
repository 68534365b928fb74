//! Patient endpoints.

use rgs_core::Patient;

use crate::config::ClientConfig;
use crate::request::{ApiRequest, Method};
use crate::ClientResult;

const PATIENT_PATH: &str = "api/v1/patient";

/// Builds requests against `/api/v1/patient`.
pub struct PatientRequests<'a> {
    config: &'a ClientConfig,
}

impl<'a> PatientRequests<'a> {
    pub fn new(config: &'a ClientConfig) -> Self {
        Self { config }
    }

    /// `POST /api/v1/patient` with the patient's wire projection.
    pub fn create(&self, patient: &Patient) -> ClientResult<ApiRequest> {
        let body = patient.to_json()?;
        Ok(ApiRequest::new(self.config, Method::Post, PATIENT_PATH)?.with_json_body(body))
    }

    /// `PUT /api/v1/patient/{externalId}` with the patient's wire projection.
    pub fn update(&self, patient: &Patient) -> ClientResult<ApiRequest> {
        let valid = patient.checked()?;
        let body = valid.to_json()?;
        Ok(ApiRequest::new(self.config, Method::Put, &patient_path(valid.external_id()))?.with_json_body(body))
    }

    /// `GET /api/v1/patient/{externalId}`.
    pub fn get(&self, external_id: i64) -> ClientResult<ApiRequest> {
        Ok(ApiRequest::new(self.config, Method::Get, &patient_path(external_id))?)
    }

    /// `POST /api/v1/patient/{externalId}/activate`.
    pub fn activate(&self, external_id: i64) -> ClientResult<ApiRequest> {
        let path = format!("{}/activate", patient_path(external_id));
        Ok(ApiRequest::new(self.config, Method::Post, &path)?)
    }

    /// `POST /api/v1/patient/{externalId}/inactivate`.
    pub fn inactivate(&self, external_id: i64) -> ClientResult<ApiRequest> {
        let path = format!("{}/inactivate", patient_path(external_id));
        Ok(ApiRequest::new(self.config, Method::Post, &path)?)
    }
}

pub(crate) fn patient_path(external_id: i64) -> String {
    format!("{PATIENT_PATH}/{external_id}")
}
