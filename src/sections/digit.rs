//! Digit section - checks for at least one 0-9.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::violation::Violation;

pub fn digit_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return Some(Violation::MissingDigit);
    }
    None
}
