//! Dictionary section - rejects passwords that are wordlist entries.

use super::SectionResult;
use crate::checker::WeakReason;
use crate::dictionary::DictionaryIndex;

/// Checks the password itself against both dictionary tables.
pub fn dictionary_section(password: &str, index: &DictionaryIndex) -> SectionResult {
    if index.contains(password) {
        return Some(WeakReason::InDictionary);
    }
    None
}
