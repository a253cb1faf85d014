//! Backend connection settings.

use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const API_URL_ENV: &str = "PWD_POLICY_API_URL";
pub const API_TIMEOUT_ENV: &str = "PWD_POLICY_API_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("Invalid timeout value: {0}")]
    InvalidTimeout(String),
}

/// Settings for [`RegistrationClient`](super::RegistrationClient).
///
/// Passed explicitly to the client instead of living in a process-wide
/// instance, so each application decides where its backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Builds a configuration for `base_url` with default timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns error if the URL does not parse or its scheme is not http(s).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)?;
        match base_url.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        Ok(Self {
            base_url,
            user_agent: APP_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Loads the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_POLICY_API_URL`: backend base URL (default: `http://localhost:8000`)
    /// - `PWD_POLICY_API_TIMEOUT_SECS`: request timeout in seconds (default: 10,
    ///   must be greater than zero)
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let mut config = Self::new(&url)?;

        if let Ok(raw) = std::env::var(API_TIMEOUT_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&secs| secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config.timeout = Duration::from_secs(secs);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "client config loaded: base_url={}, timeout={:?}",
            config.base_url,
            config.timeout
        );

        Ok(config)
    }

    /// Overrides the request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] for a zero duration, which
    /// would make every request time out.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout(format!("{:?}", timeout)));
        }
        self.timeout = timeout;
        Ok(self)
    }

    /// Joins `path` onto the base URL.
    ///
    /// A trailing `/` on the base is dropped so `http://host/api/` and
    /// `http://host/api` both give `http://host/api/users/` for `/users/`.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, url::ParseError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}{}", base, path))
    }
}
