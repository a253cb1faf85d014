//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::violation::{MIN_LENGTH, Violation};

/// Checks if the password meets the minimum length.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(Violation::TooShort);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1$".to_string().into());
        assert_eq!(length_section(&pwd), Some(Violation::TooShort));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert_eq!(length_section(&pwd), None);
    }

    #[test]
    fn test_length_section_counts_characters() {
        // 7 characters, 14 bytes
        let pwd = SecretString::new("ééééééé".to_string().into());
        assert_eq!(length_section(&pwd), Some(Violation::TooShort));

        let pwd = SecretString::new("éééééééé".to_string().into());
        assert_eq!(length_section(&pwd), None);
    }

    #[test]
    fn test_length_section_astral_characters_count_once() {
        // 6 characters, 8 UTF-16 code units
        let pwd = SecretString::new("Aa1$😀😀".to_string().into());
        assert_eq!(length_section(&pwd), Some(Violation::TooShort));

        let pwd = SecretString::new("Aa1$😀😀😀😀".to_string().into());
        assert_eq!(length_section(&pwd), None);
    }

    #[test]
    fn test_length_section_empty() {
        let pwd = SecretString::new(String::new().into());
        assert_eq!(length_section(&pwd), Some(Violation::TooShort));
    }
}
