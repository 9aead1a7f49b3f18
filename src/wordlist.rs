//! Wordlist loading module
//!
//! Streams the wordlist file line by line into a [`DictionaryIndex`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::dictionary::{DictionaryError, DictionaryIndex, M_CHAINING, M_PROBING};

#[cfg(feature = "tracing")]
use crate::dictionary::Dictionary;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
    #[error("Failed to build dictionary: {0}")]
    Dictionary(#[from] DictionaryError),
    #[cfg(feature = "async")]
    #[error("Wordlist loading task failed: {0}")]
    LoadTask(#[from] tokio::task::JoinError),
}

/// What to do with empty lines in the wordlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLines {
    /// Store them as empty-string entries.
    #[default]
    Insert,
    Skip,
}

/// Table sizes and line handling for a [`DictionaryIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    pub chaining_capacity: usize,
    pub probing_capacity: usize,
    pub blank_lines: BlankLines,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            chaining_capacity: M_CHAINING,
            probing_capacity: M_PROBING,
            blank_lines: BlankLines::default(),
        }
    }
}

impl IndexConfig {
    pub fn with_chaining_capacity(mut self, capacity: usize) -> Self {
        self.chaining_capacity = capacity;
        self
    }

    pub fn with_probing_capacity(mut self, capacity: usize) -> Self {
        self.probing_capacity = capacity;
        self
    }

    pub fn with_blank_lines(mut self, blank_lines: BlankLines) -> Self {
        self.blank_lines = blank_lines;
        self
    }

    pub fn build_index(&self) -> Result<DictionaryIndex, DictionaryError> {
        DictionaryIndex::with_capacities(self.chaining_capacity, self.probing_capacity)
    }
}

/// Returns the wordlist file path.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_PATH`
/// 2. Default path `./lib/wordlist.txt`
pub fn get_wordlist_path() -> PathBuf {
    std::env::var("PWD_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./lib/wordlist.txt"))
}

/// Loads the wordlist found at [`get_wordlist_path`] with the default configuration.
///
/// # Errors
///
/// See [`load_index_from_path`].
pub fn load_index() -> Result<DictionaryIndex, WordlistError> {
    load_index_from_path(get_wordlist_path(), &IndexConfig::default())
}

/// Builds both dictionary tables from the wordlist at `path`.
///
/// Lines are inserted in file order, without trimming; only the line
/// terminator is removed.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read, or is not valid UTF-8
/// - File has no words
/// - A table capacity is invalid, or the probing table fills up
pub fn load_index_from_path<P: AsRef<Path>>(
    path: P,
    config: &IndexConfig,
) -> Result<DictionaryIndex, WordlistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist loading FAILED: FileNotFound {:?}", path);
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Loading wordlist from {:?}", path);

    let reader = BufReader::new(File::open(path)?);
    let index = load_index_from_reader(reader, config)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist loaded: {} words from {:?}", index.len(), path);

    Ok(index)
}

/// Builds both dictionary tables from any line source.
pub fn load_index_from_reader<R: BufRead>(
    reader: R,
    config: &IndexConfig,
) -> Result<DictionaryIndex, WordlistError> {
    let mut index = config.build_index()?;
    let mut has_content = false;

    for line in reader.lines() {
        let word = line?;
        has_content |= !word.is_empty();

        if word.is_empty() && config.blank_lines == BlankLines::Skip {
            continue;
        }

        if let Err(e) = index.insert(word) {
            #[cfg(feature = "tracing")]
            tracing::error!("Wordlist loading FAILED after {} words: {}", index.len(), e);
            return Err(e.into());
        }
    }

    if !has_content {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist loading FAILED: Empty file");
        return Err(WordlistError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Chained table: load factor {:.3}, longest bucket {}; probed table: load factor {:.3}",
        index.chained().load_factor(),
        index.chained().longest_bucket(),
        index.probed().load_factor(),
    );

    Ok(index)
}

#[cfg(feature = "async")]
impl DictionaryIndex {
    /// Loads the wordlist on the blocking pool and waits for it to finish,
    /// so the returned index is complete before any lookup.
    pub async fn load_async(
        path: impl Into<PathBuf>,
        config: IndexConfig,
    ) -> Result<Self, WordlistError> {
        let path = path.into();
        tokio::task::spawn_blocking(move || load_index_from_path(&path, &config)).await?
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_load_async_completes_before_lookup() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "password").expect("Failed to write");
        writeln!(temp_file, "dragon12345").expect("Failed to write");

        let index = DictionaryIndex::load_async(temp_file.path(), IndexConfig::default())
            .await
            .expect("Failed to load wordlist");

        assert_eq!(index.len(), 2);
        assert!(index.contains("dragon12345"));
    }

    #[tokio::test]
    async fn test_load_async_file_not_found() {
        let result =
            DictionaryIndex::load_async("/nonexistent/wordlist.txt", IndexConfig::default()).await;
        assert!(matches!(result, Err(WordlistError::FileNotFound(_))));
    }
}
