//! Dictionary hash tables
//!
//! Two independent tables hold the same wordlist: one with separate chaining,
//! one with linear probing. Each uses its own hash function and size.

mod chained;
mod probed;

pub use chained::{ChainedDictionary, M_CHAINING};
pub use probed::{ProbedDictionary, M_PROBING};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("Invalid table capacity {capacity}: must be between 1 and {max}", max = i32::MAX)]
    InvalidCapacity { capacity: usize },
    #[error("Probing table is full ({capacity} slots): capacity must exceed the dictionary size")]
    Saturated { capacity: usize },
}

/// Exact-match word membership.
pub trait Dictionary {
    /// Stores `word`. Duplicates are kept.
    fn insert(&mut self, word: String) -> Result<(), DictionaryError>;

    /// Case-sensitive, full-string lookup.
    fn contains(&self, word: &str) -> bool;

    /// Number of words inserted, duplicates included.
    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }
}

/// Validates a table size and returns it as the signed modulus used for indexing.
pub(crate) fn checked_modulus(capacity: usize) -> Result<i32, DictionaryError> {
    match i32::try_from(capacity) {
        Ok(modulus) if modulus > 0 => Ok(modulus),
        _ => Err(DictionaryError::InvalidCapacity { capacity }),
    }
}

/// Both tables built from one word stream.
///
/// Every word goes into both tables; a lookup hits if either table holds it.
#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    chained: ChainedDictionary,
    probed: ProbedDictionary,
}

impl DictionaryIndex {
    pub fn new(chained: ChainedDictionary, probed: ProbedDictionary) -> Self {
        Self { chained, probed }
    }

    pub fn with_capacities(
        chaining_capacity: usize,
        probing_capacity: usize,
    ) -> Result<Self, DictionaryError> {
        Ok(Self::new(
            ChainedDictionary::with_capacity(chaining_capacity)?,
            ProbedDictionary::with_capacity(probing_capacity)?,
        ))
    }

    /// Inserts `word` into both tables.
    ///
    /// The probed table is filled first so a saturation error leaves the
    /// chained table untouched for that word.
    pub fn insert(&mut self, word: String) -> Result<(), DictionaryError> {
        self.probed.insert(word.clone())?;
        self.chained.insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.chained.contains(word) || self.probed.contains(word)
    }

    pub fn chained(&self) -> &ChainedDictionary {
        &self.chained
    }

    pub fn probed(&self) -> &ProbedDictionary {
        &self.probed
    }

    pub fn len(&self) -> usize {
        self.probed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DictionaryIndex {
    fn default() -> Self {
        Self::new(ChainedDictionary::new(), ProbedDictionary::new())
    }
}
