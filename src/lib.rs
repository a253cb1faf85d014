//! Password composition policy and registration client
//!
//! This library checks a candidate password against a fixed composition
//! policy and reports every rule it breaks, then optionally submits a
//! registration form to a backend once the password is acceptable.
//!
//! # Policy
//!
//! Rules are checked independently and reported in this order:
//!
//! 1. at least 8 characters
//! 2. an uppercase letter (A-Z)
//! 3. a lowercase letter (a-z)
//! 4. a digit (0-9)
//! 5. one of `{}:"<>,./;'[]\$`
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `client` (default): Enables the registration HTTP client
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_API_URL`: Backend base URL (default: `http://localhost:8000`)
//! - `PWD_POLICY_API_TIMEOUT_SECS`: Request timeout in seconds (default: 10)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{validate_password, is_valid_password};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("short".to_string().into());
//! for message in validate_password(&password) {
//!     println!("{}", message);
//! }
//!
//! let password = SecretString::new("Valid123$".to_string().into());
//! assert!(is_valid_password(&password));
//! ```
//!
//! ```rust,no_run
//! # #[cfg(feature = "client")]
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use pwd_policy::client::{ClientConfig, RegistrationClient, RegistrationForm, RegistrationTask};
//!
//! let client = RegistrationClient::new(ClientConfig::from_env()?)?;
//! let form = RegistrationForm::new("alice", "alice@example.com", "Valid123$");
//!
//! match RegistrationTask::spawn(client, form).join().await {
//!     Ok(outcome) => println!("Registered {}, next: {:?}", outcome.user.id, outcome.redirect),
//!     Err(e) => eprintln!("{}", e.user_message()),
//! }
//! # Ok(())
//! # }
//! ```

// Internal modules
mod evaluator;
mod sections;
mod violation;

#[cfg(feature = "client")]
pub mod client;

// Public API
pub use evaluator::{evaluate_password, is_valid_password, validate_password};
pub use violation::{MIN_LENGTH, PolicyEvaluation, SPECIAL_CHARACTERS, Violation};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_tx};
