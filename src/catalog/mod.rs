//! Word catalog
//!
//! The fixed list of candidate answers, each with a commonality score.
//! Loaded once, never modified afterwards; sessions borrow it read-only.

mod embedded;
pub mod loader;

pub use embedded::DEFAULT_CATALOG;
pub use loader::{CatalogSource, load};

use crate::core::Word;
use rustc_hash::FxHashMap;

/// A candidate answer and how likely it is to be the answer
#[derive(Debug, Clone, PartialEq)]
pub struct WordEntry {
    pub word: Word,
    /// Non-negative; higher means more likely
    pub frequency: f64,
}

impl WordEntry {
    #[must_use]
    pub const fn new(word: Word, frequency: f64) -> Self {
        Self { word, frequency }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        self.word.text()
    }
}

/// Ordered, immutable collection of every candidate word
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<WordEntry>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from entries already validated by the loader
    pub(crate) fn from_entries(entries: Vec<WordEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.text().to_string(), i))
            .collect();
        Self { entries, index }
    }

    /// The catalog compiled into the binary
    ///
    /// # Errors
    /// Only if the embedded data is itself malformed.
    pub fn embedded() -> Result<Self, crate::error::CatalogLoadError> {
        load(&CatalogSource::Text(DEFAULT_CATALOG))
    }

    /// Entries in load order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a word's entry
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.index.get(word).map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }
}
