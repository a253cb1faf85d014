//! HTTP calls to the registration backend.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::config::ClientConfig;
use super::form::RegistrationForm;
use crate::violation::PolicyEvaluation;

/// Path of the user creation endpoint, relative to the base URL.
pub const USERS_ENDPOINT: &str = "/users/";

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("{}", .0.summary())]
    Policy(PolicyEvaluation),
    #[error("Backend rejected registration: {status}")]
    Backend { status: StatusCode, body: Value },
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Registration cancelled")]
    Cancelled,
    #[error("Registration task aborted")]
    Aborted,
}

impl RegisterError {
    /// Text to show the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            RegisterError::Policy(evaluation) => evaluation.summary(),
            RegisterError::Backend { body, .. } => format!("Failed to register user: {}", body),
            _ => "Unexpected error occurred".to_string(),
        }
    }
}

/// User record returned by the backend. The password is never echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreatedUser {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterResponse {
    pub status: StatusCode,
    pub user: CreatedUser,
}

#[derive(Serialize)]
struct RegisterPayload<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Client for the registration backend.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    http: Client,
    config: ClientConfig,
}

impl RegistrationClient {
    pub fn new(config: ClientConfig) -> Result<Self, RegisterError> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Creates the user on the backend. Single attempt, no retry.
    ///
    /// The password is not checked here; see
    /// [`submit_registration`](super::submit_registration) for the full flow.
    ///
    /// # Errors
    ///
    /// - [`RegisterError::Backend`] for non-2xx responses, with the response
    ///   body as JSON (or as a JSON string when it is not JSON)
    /// - [`RegisterError::Transport`] when the request fails or the success
    ///   body cannot be decoded
    pub async fn register(&self, form: &RegistrationForm) -> Result<RegisterResponse, RegisterError> {
        let url = self.config.endpoint_url(USERS_ENDPOINT)?;

        let payload = RegisterPayload {
            username: &form.username,
            email: &form.email,
            password: form.exposed_password(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!("registering user {} at {}", form.username, url);

        let response = self.http.post(url).json(&payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let body: Value = serde_json::from_str(&text).unwrap_or(Value::String(text));

            #[cfg(feature = "tracing")]
            tracing::error!("Backend error: {} - {}", status, body);

            return Err(RegisterError::Backend { status, body });
        }

        let user: CreatedUser = response.json().await?;

        #[cfg(feature = "tracing")]
        tracing::info!("User created: {} ({})", user.username, user.id);

        Ok(RegisterResponse { status, user })
    }
}
