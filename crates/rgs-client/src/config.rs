//! Client configuration.

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Environment variable holding the API base URL.
pub const HOST_ENV: &str = "RGS_API_HOST";
/// Environment variable holding the partner ID.
pub const PARTNER_ID_ENV: &str = "RGS_PARTNER_ID";
/// Optional environment variable holding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "RGS_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing configuration value: {0}")]
    Missing(&'static str),

    #[error("Invalid API host {host:?}: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid number in {name}: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Connection parameters for one partner account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    host: Url,
    partner_id: u64,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with the default timeout.
    ///
    /// Request paths are resolved relative to `host`, so a base path such as
    /// `https://example.org/rgs` is kept.
    pub fn new(host: Url, partner_id: u64) -> Self {
        Self {
            host: with_trailing_slash(host),
            partner_id,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a configuration from a textual host.
    pub fn parse(host: &str, partner_id: u64) -> Result<Self, ConfigError> {
        let url = Url::parse(host).map_err(|source| ConfigError::InvalidHost {
            host: host.to_string(),
            source,
        })?;
        Ok(Self::new(url, partner_id))
    }

    /// Read `RGS_API_HOST`, `RGS_PARTNER_ID` and `RGS_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source (environment, file, test map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_ENV).ok_or(ConfigError::Missing(HOST_ENV))?;
        let partner_id = lookup(PARTNER_ID_ENV).ok_or(ConfigError::Missing(PARTNER_ID_ENV))?;
        let partner_id = parse_number(PARTNER_ID_ENV, &partner_id)?;

        let mut config = Self::parse(host.trim(), partner_id)?;
        if let Some(timeout) = lookup(TIMEOUT_ENV) {
            config.timeout = Duration::from_secs(parse_number(TIMEOUT_ENV, &timeout)?);
        }
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn host(&self) -> &Url {
        &self.host
    }

    pub fn partner_id(&self) -> u64 {
        self.partner_id
    }

    /// Timeout the transport should apply to each request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}

fn with_trailing_slash(mut host: Url) -> Url {
    if !host.path().ends_with('/') {
        let path = format!("{}/", host.path());
        host.set_path(&path);
    }
    host
}
