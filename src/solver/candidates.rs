//! The working set of catalog words still consistent with the feedback

use crate::catalog::{Catalog, WordEntry};

/// Catalog entries still in play, in catalog order
///
/// Each round produces a new set from the previous one; a set is never
/// narrowed in place.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet<'c> {
    entries: Vec<&'c WordEntry>,
}

impl<'c> CandidateSet<'c> {
    /// Every word in the catalog
    #[must_use]
    pub fn full(catalog: &'c Catalog) -> Self {
        Self {
            entries: catalog.entries().iter().collect(),
        }
    }

    pub(crate) const fn from_entries(entries: Vec<&'c WordEntry>) -> Self {
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[&'c WordEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &'c WordEntry> + '_ {
        self.entries.iter().copied()
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

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|entry| entry.text() == word)
    }

    /// Words in the set, in order
    #[must_use]
    pub fn words(&self) -> Vec<&'c str> {
        self.entries.iter().map(|entry| entry.text()).collect()
    }
}

impl<'c> FromIterator<&'c WordEntry> for CandidateSet<'c> {
    fn from_iter<I: IntoIterator<Item = &'c WordEntry>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}
