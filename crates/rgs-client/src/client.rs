//! Proxying client: builds a request, sends it, checks the status and hands
//! the raw response back.

use chrono::{DateTime, FixedOffset};
use rgs_core::{MetricType, MetricsPayload, MetricsRangesPayload, Patient, PatientRecord};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::metrics::MetricsRequests;
use crate::patients::PatientRequests;
use crate::request::ApiRequest;
use crate::transport::{ApiResponse, HttpTransport};
use crate::{ClientError, ClientResult};

/// RGS API client over a caller-supplied transport.
pub struct RgsClient<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: HttpTransport> RgsClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn patients(&self) -> PatientRequests<'_> {
        PatientRequests::new(&self.config)
    }

    pub fn metrics(&self) -> MetricsRequests<'_> {
        MetricsRequests::new(&self.config)
    }

    // =========================================================================
    // Patients
    // =========================================================================

    /// Register a patient. Fails before sending if the patient is invalid.
    pub fn create_patient(&self, patient: &Patient) -> ClientResult<ApiResponse> {
        self.send(self.patients().create(patient)?)
    }

    /// Update a patient. Fails before sending if the patient is invalid.
    pub fn update_patient(&self, patient: &Patient) -> ClientResult<ApiResponse> {
        self.send(self.patients().update(patient)?)
    }

    pub fn get_patient(&self, external_id: i64) -> ClientResult<ApiResponse> {
        self.send(self.patients().get(external_id)?)
    }

    /// Fetch and decode a patient.
    pub fn get_patient_record(&self, external_id: i64) -> ClientResult<PatientRecord> {
        Ok(self.get_patient(external_id)?.json()?)
    }

    pub fn activate(&self, external_id: i64) -> ClientResult<ApiResponse> {
        self.send(self.patients().activate(external_id)?)
    }

    pub fn inactivate(&self, external_id: i64) -> ClientResult<ApiResponse> {
        self.send(self.patients().inactivate(external_id)?)
    }

    // =========================================================================
    // Metrics
    // =========================================================================

    pub fn get_metrics(
        &self,
        external_id: i64,
        from: Option<DateTime<FixedOffset>>,
        metric_type: MetricType,
    ) -> ClientResult<ApiResponse> {
        self.send(self.metrics().get(external_id, from, metric_type)?)
    }

    pub fn create_metrics(&self, payload: &MetricsPayload) -> ClientResult<ApiResponse> {
        self.send(self.metrics().create(payload)?)
    }

    #[deprecated(note = "removed by RGS on 2020-05-12")]
    #[allow(deprecated)]
    pub fn update_metrics(&self, payload: &MetricsPayload) -> ClientResult<ApiResponse> {
        self.send(self.metrics().update(payload)?)
    }

    pub fn get_metrics_last(&self, external_id: i64) -> ClientResult<ApiResponse> {
        self.send(self.metrics().last(external_id)?)
    }

    pub fn update_metrics_ranges(&self, payload: &MetricsRangesPayload) -> ClientResult<ApiResponse> {
        self.send(self.metrics().update_ranges(payload)?)
    }

    fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        debug!(
            request_id = %request.id,
            method = %request.method,
            path = request.path(),
            "sending RGS request"
        );
        let response = self.transport.send(&request)?;
        check_status(&request, response)
    }
}

/// Map non-2xx responses to errors.
fn check_status(request: &ApiRequest, response: ApiResponse) -> ClientResult<ApiResponse> {
    if response.is_success() {
        debug!(request_id = %request.id, status = response.status, "RGS request succeeded");
        return Ok(response);
    }

    warn!(
        request_id = %request.id,
        method = %request.method,
        path = request.path(),
        status = response.status,
        "RGS request failed"
    );
    let ApiResponse { status, body } = response;
    if status == 400 {
        Err(ClientError::BadRequest { status, body })
    } else {
        Err(ClientError::Api { status, body })
    }
}
