//! Transport-neutral HTTP requests.

use std::fmt;

use uuid::Uuid;
use url::Url;

use crate::config::ClientConfig;

pub const PARTNER_ID_HEADER: &str = "X-Partner-Id";
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";
const JSON: &str = "application/json";

/// HTTP methods used by the RGS API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built request, ready for an [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Correlates log lines of one request
    pub id: Uuid,
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Request to `path`, relative to the configured host.
    pub(crate) fn new(config: &ClientConfig, method: Method, path: &str) -> Result<Self, url::ParseError> {
        let url = config.host().join(path)?;
        let id = Uuid::new_v4();
        let headers = vec![
            ("Accept".to_string(), JSON.to_string()),
            (PARTNER_ID_HEADER.to_string(), config.partner_id().to_string()),
            (REQUEST_ID_HEADER.to_string(), id.to_string()),
        ];
        Ok(Self {
            id,
            method,
            url,
            headers,
            body: None,
        })
    }

    pub(crate) fn with_json_body(mut self, body: String) -> Self {
        self.headers.push(("Content-Type".to_string(), JSON.to_string()));
        self.body = Some(body);
        self
    }

    pub(crate) fn with_query(mut self, pairs: &[(&str, &str)]) -> Self {
        self.url.query_pairs_mut().extend_pairs(pairs);
        self
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }
}
