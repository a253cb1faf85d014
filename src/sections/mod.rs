//! Password policy sections
//!
//! Each section checks one rule of the policy.

mod digit;
mod length;
mod letters;
mod special;

pub use digit::digit_section;
pub use length::length_section;
pub use letters::{lowercase_section, uppercase_section};
pub use special::special_character_section;

use crate::violation::Violation;

/// Result type for section functions.
/// - `Some(violation)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Violation>;
