//! Form state and application routes.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::evaluate_password;
use crate::violation::PolicyEvaluation;

/// Values typed into the registration form.
#[derive(Debug)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    password: SecretString,
}

impl RegistrationForm {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: secret(password.into()),
        }
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Replaces the password; the previous value is zeroized on drop.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = secret(password.into());
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub(crate) fn exposed_password(&self) -> &str {
        self.password.expose_secret()
    }

    /// Checks the current password against the policy.
    pub fn evaluate_password(&self) -> PolicyEvaluation {
        evaluate_password(&self.password)
    }
}

fn secret(password: String) -> SecretString {
    SecretString::new(password.into_boxed_str())
}

/// Pages of the registration application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// Registration form, served at `/`.
    #[default]
    Register,
    /// Landing page after a successful registration.
    Home,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Register => "/",
            Route::Home => "/home",
        }
    }

    /// Resolves a path to its route, `None` for unknown paths.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" | "" => Some(Route::Register),
            "/home" | "/home/" => Some(Route::Home),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
