//! String hash functions used by the dictionary tables.
//!
//! Both functions work on UTF-16 code units and use 32-bit signed
//! wrapping arithmetic, so raw hashes can be negative.

/// Sparse sampling hash used by the chained table.
///
/// Samples every `max(1, len / 8)`-th code unit starting at index 0 and
/// accumulates `hash * 37 + unit`.
pub fn hash_old(word: &str) -> i32 {
    let units: Vec<u16> = word.encode_utf16().collect();
    let skip = (units.len() / 8).max(1);

    units
        .iter()
        .step_by(skip)
        .fold(0i32, |hash, &unit| hash.wrapping_mul(37).wrapping_add(i32::from(unit)))
}

/// Full hash used by the probed table: `hash * 31 + unit` over every code unit.
pub fn hash_new(word: &str) -> i32 {
    word.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Maps a raw hash onto `0..modulus`.
///
/// Takes the signed remainder first and the absolute value second
/// (mod-then-abs), which is not the same as `hash.abs() % modulus`.
pub fn table_index(hash: i32, modulus: i32) -> usize {
    debug_assert!(modulus > 0);
    (hash % modulus).unsigned_abs() as usize
}

/// Number of UTF-16 code units in `text`, the unit both hashes consume.
pub fn char_count(text: &str) -> usize {
    text.encode_utf16().count()
}
