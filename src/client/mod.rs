//! Registration client
//!
//! Submits a registration form to the backend once the password satisfies
//! the policy, and decides where the user goes next.

mod api;
mod config;
mod flow;
mod form;

pub use api::{CreatedUser, RegisterError, RegisterResponse, RegistrationClient, USERS_ENDPOINT};
pub use config::{API_TIMEOUT_ENV, API_URL_ENV, ClientConfig, ConfigError};
pub use flow::{RegistrationTask, SubmitOutcome, submit_registration};
pub use form::{RegistrationForm, Route};
