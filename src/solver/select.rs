//! Guess selector
//!
//! Picks the most common remaining word. Ties go to the word that comes
//! first in the catalog, so the same candidates always give the same guess.

use super::candidates::CandidateSet;
use crate::catalog::WordEntry;
use crate::error::NoCandidatesError;

/// Select the next guess from the candidates
///
/// # Errors
/// Returns `NoCandidatesError` when the set is empty, which means the
/// feedback seen so far contradicts itself.
pub fn select<'c>(candidates: &CandidateSet<'c>) -> Result<&'c WordEntry, NoCandidatesError> {
    candidates
        .iter()
        .reduce(|best, entry| {
            if entry.frequency > best.frequency {
                entry
            } else {
                best
            }
        })
        .ok_or(NoCandidatesError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogSource, load};

    fn catalog(text: &str) -> Catalog {
        load(&CatalogSource::Text(text)).unwrap()
    }

    #[test]
    fn highest_frequency_wins() {
        let catalog = catalog("trace,5\ncrane,10\nslate,8\n");
        let best = select(&CandidateSet::full(&catalog)).unwrap();
        assert_eq!(best.text(), "crane");
    }

    #[test]
    fn ties_go_to_catalog_order() {
        let catalog = catalog("slate,3\ncrane,7\ntrace,7\nirate,7\n");
        let best = select(&CandidateSet::full(&catalog)).unwrap();
        assert_eq!(best.text(), "crane");
    }

    #[test]
    fn all_zero_frequencies_pick_first() {
        let catalog = catalog("slate,0\ncrane,0\n");
        let best = select(&CandidateSet::full(&catalog)).unwrap();
        assert_eq!(best.text(), "slate");
    }

    #[test]
    fn empty_set_fails() {
        let catalog = catalog("crane,1\n");
        let empty: CandidateSet<'_> = CandidateSet::full(&catalog)
            .iter()
            .filter(|_| false)
            .collect();
        assert_eq!(select(&empty), Err(NoCandidatesError));
    }
}
