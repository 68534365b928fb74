//! RGS API client.
//!
//! Typed request builders and a thin proxying client for the RGS
//! chronic-monitoring API. Methods return the raw [`ApiResponse`]; the
//! HTTP stack itself is supplied by the caller through [`HttpTransport`].

pub mod client;
pub mod config;
pub mod metrics;
pub mod patients;
pub mod request;
pub mod transport;

pub use client::RgsClient;
pub use config::{ClientConfig, ConfigError};
pub use metrics::MetricsRequests;
pub use patients::PatientRequests;
pub use request::{ApiRequest, Method};
pub use transport::{ApiResponse, HttpTransport, TransportError};

use rgs_core::PatientError;
use thiserror::Error;

/// Client errors.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Patient(#[from] PatientError),

    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Bad request ({status}): {body}")]
    BadRequest { status: u16, body: String },

    #[error("RGS API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::BadRequest { status, .. } | ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
