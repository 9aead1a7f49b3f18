//! Digit suffix section - rejects passwords one trailing digit away from a wordlist entry.

use super::SectionResult;
use crate::checker::WeakReason;
use crate::dictionary::DictionaryIndex;

/// Checks whether the password and a wordlist entry differ by a single
/// trailing decimal digit, in either direction:
/// - `password + d` is listed, for any `d` in `0..=9`
/// - `password` ends in `d` and the rest of it is listed
///
/// Digits in any other position, or more than one digit, are not considered.
///
/// The second direction rejects any listed word with a digit tacked on, even
/// when the result was never listed itself: with `"passwor"` listed,
/// `"passwor1"` is weak.
pub fn digit_suffix_section(password: &str, index: &DictionaryIndex) -> SectionResult {
    let mut candidate = String::with_capacity(password.len() + 1);

    for digit in 0..=9u8 {
        candidate.clear();
        candidate.push_str(password);
        candidate.push(char::from(b'0' + digit));

        if index.contains(&candidate) {
            return Some(WeakReason::InDictionaryWithDigit { digit });
        }
    }

    let last = password.chars().next_back()?;
    let digit = last.to_digit(10)?;
    let stem = &password[..password.len() - 1];
    if index.contains(stem) {
        return Some(WeakReason::InDictionaryWithDigit { digit: digit as u8 });
    }
    None
}
