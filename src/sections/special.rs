//! Special character section - checks for one of the allowed symbols.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::violation::{SPECIAL_CHARACTERS, Violation};

/// Checks that the password contains at least one character from
/// [`SPECIAL_CHARACTERS`]. Other punctuation (`!`, `@`, `#`, ...) does not count.
pub fn special_character_section(password: &SecretString) -> SectionResult {
    if !password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARACTERS.contains(c))
    {
        return Some(Violation::MissingSpecial);
    }
    None
}
