//! Length section - checks password minimum length.

use super::SectionResult;
use crate::checker::WeakReason;
use crate::dictionary::DictionaryIndex;
use crate::hashing::char_count;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Checks if the password meets the minimum length.
///
/// Length is counted in UTF-16 code units, the same unit the dictionary
/// hashes consume.
pub fn length_section(password: &str, _index: &DictionaryIndex) -> SectionResult {
    if char_count(password) < MIN_PASSWORD_LENGTH {
        return Some(WeakReason::TooShort {
            min_length: MIN_PASSWORD_LENGTH,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn too_short() -> SectionResult {
        Some(WeakReason::TooShort { min_length: 8 })
    }

    #[test]
    fn test_length_section_too_short() {
        let index = DictionaryIndex::default();
        assert_eq!(length_section("Short1!", &index), too_short());
        assert_eq!(length_section("", &index), too_short());
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let index = DictionaryIndex::default();
        assert_eq!(length_section("12345678", &index), None);
    }

    #[test]
    fn test_length_section_counts_utf16_units() {
        let index = DictionaryIndex::default();
        // 7 chars, 8 units
        assert_eq!(length_section("abcdef😀", &index), None);
        // 7 chars, 7 units, 14 bytes
        assert_eq!(length_section("ééééééé", &index), too_short());
    }
}
