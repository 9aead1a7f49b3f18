//! Open addressing table with linear probing.

use super::{checked_modulus, Dictionary, DictionaryError};
use crate::hashing::{hash_new, table_index};

/// Default number of slots.
pub const M_PROBING: usize = 20000;

/// Fixed-size slot array; collisions step forward one slot at a time,
/// wrapping at the end.
///
/// Nothing is ever removed, so a lookup may stop at the first empty slot.
/// The table never grows: inserting into a full table is an error.
#[derive(Debug, Clone)]
pub struct ProbedDictionary {
    slots: Vec<Option<String>>,
    modulus: i32,
    len: usize,
}

impl ProbedDictionary {
    pub fn new() -> Self {
        Self::build(M_PROBING as i32)
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, DictionaryError> {
        Ok(Self::build(checked_modulus(capacity)?))
    }

    fn build(modulus: i32) -> Self {
        Self {
            slots: vec![None; modulus as usize],
            modulus,
            len: 0,
        }
    }

    fn home_of(&self, word: &str) -> usize {
        table_index(hash_new(word), self.modulus)
    }

    /// Probe sequence from the home slot of `word`, visiting every slot once.
    fn probe(&self, word: &str) -> impl Iterator<Item = usize> + use<> {
        let home = self.home_of(word);
        let capacity = self.slots.len();
        (0..capacity).map(move |step| (home + step) % capacity)
    }

    /// Slot currently holding the first copy of `word`.
    pub fn slot_of(&self, word: &str) -> Option<usize> {
        for index in self.probe(word) {
            match &self.slots[index] {
                None => return None,
                Some(stored) if stored == word => return Some(index),
                Some(_) => {}
            }
        }
        None
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }
}

impl Default for ProbedDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for ProbedDictionary {
    fn insert(&mut self, word: String) -> Result<(), DictionaryError> {
        let free = self
            .probe(&word)
            .find(|&index| self.slots[index].is_none())
            .ok_or(DictionaryError::Saturated {
                capacity: self.slots.len(),
            })?;

        self.slots[free] = Some(word);
        self.len += 1;
        Ok(())
    }

    fn contains(&self, word: &str) -> bool {
        self.slot_of(word).is_some()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_words(capacity: usize, words: &[&str]) -> ProbedDictionary {
        let mut dict = ProbedDictionary::with_capacity(capacity).unwrap();
        for word in words {
            dict.insert(word.to_string()).unwrap();
        }
        dict
    }

    #[test]
    fn test_default_capacity() {
        let dict = ProbedDictionary::new();
        assert_eq!(dict.capacity(), M_PROBING);
        assert!(dict.is_empty());
    }

    #[test]
    fn test_inserted_words_are_found() {
        let words = ["password", "dragon12345", "letmein", "", "trustno1"];
        let dict = with_words(M_PROBING, &words);

        for word in words {
            assert!(dict.contains(word), "missing {:?}", word);
        }
        assert!(!dict.contains("Password"));
        assert!(!dict.contains("dragon1234"));
    }

    #[test]
    fn test_word_lands_in_home_slot() {
        let dict = with_words(M_PROBING, &["password", "password7"]);
        assert_eq!(dict.slot_of("password"), Some(5755));
        // hash_new = -928147204, -7204 before abs
        assert_eq!(dict.slot_of("password7"), Some(7204));
    }

    #[test]
    fn test_probe_wraps_to_start() {
        // "aa", "af" and "ak" all hash to slot 4 of 5
        let dict = with_words(5, &["aa", "af", "ak"]);

        assert_eq!(dict.slot_of("aa"), Some(4));
        assert_eq!(dict.slot_of("af"), Some(0));
        assert_eq!(dict.slot_of("ak"), Some(1));
        // same home, scan stops at empty slot 2
        assert!(!dict.contains("ap"));
    }

    #[test]
    fn test_duplicates_take_separate_slots() {
        let dict = with_words(5, &["aa", "aa"]);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.slot_of("aa"), Some(4));
        assert!(dict.contains("aa"));
    }

    #[test]
    fn test_insert_into_full_table_fails() {
        let mut dict = with_words(3, &["one", "two", "three"]);
        assert!(dict.is_full());

        let result = dict.insert("four".to_string());
        assert_eq!(result, Err(DictionaryError::Saturated { capacity: 3 }));
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_lookup_on_full_table_terminates() {
        let dict = with_words(3, &["one", "two", "three"]);
        assert!(dict.contains("three"));
        assert!(!dict.contains("four"));
    }
}
