//! Separate chaining table.

use super::{checked_modulus, Dictionary, DictionaryError};
use crate::hashing::{hash_old, table_index};

/// Default number of buckets.
pub const M_CHAINING: usize = 1000;

/// Fixed-size table of buckets, each holding the words that hashed to it
/// in insertion order.
///
/// Sized small relative to the wordlist, so buckets grow long and lookups
/// scan them linearly.
#[derive(Debug, Clone)]
pub struct ChainedDictionary {
    buckets: Vec<Option<Vec<String>>>,
    modulus: i32,
    len: usize,
}

impl ChainedDictionary {
    pub fn new() -> Self {
        Self::build(M_CHAINING as i32)
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, DictionaryError> {
        Ok(Self::build(checked_modulus(capacity)?))
    }

    fn build(modulus: i32) -> Self {
        Self {
            buckets: vec![None; modulus as usize],
            modulus,
            len: 0,
        }
    }

    fn index_of(&self, word: &str) -> usize {
        table_index(hash_old(word), self.modulus)
    }

    /// Words stored at `index`, or `None` if nothing ever hashed there.
    pub fn bucket(&self, index: usize) -> Option<&[String]> {
        self.buckets.get(index)?.as_deref()
    }

    /// Length of the longest chain.
    pub fn longest_bucket(&self) -> usize {
        self.buckets
            .iter()
            .flatten()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }
}

impl Default for ChainedDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for ChainedDictionary {
    fn insert(&mut self, word: String) -> Result<(), DictionaryError> {
        let index = self.index_of(&word);
        self.buckets[index].get_or_insert_with(Vec::new).push(word);
        self.len += 1;
        Ok(())
    }

    fn contains(&self, word: &str) -> bool {
        self.buckets[self.index_of(word)]
            .as_ref()
            .is_some_and(|bucket| bucket.iter().any(|w| w == word))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }
}
