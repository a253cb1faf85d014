//! Letter sections - ASCII uppercase and lowercase presence.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::violation::Violation;

pub fn uppercase_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_uppercase()) {
        return Some(Violation::MissingUppercase);
    }
    None
}

pub fn lowercase_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_lowercase()) {
        return Some(Violation::MissingLowercase);
    }
    None
}
