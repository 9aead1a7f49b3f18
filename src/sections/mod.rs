//! Password strength rules
//!
//! Each section checks one rule against the password and the dictionary index.

mod dictionary;
mod digit_suffix;
mod length;

pub use dictionary::dictionary_section;
pub use digit_suffix::digit_suffix_section;
pub use length::{length_section, MIN_PASSWORD_LENGTH};

use crate::checker::WeakReason;

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<WeakReason>;
