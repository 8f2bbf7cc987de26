//! Word catalog loading
//!
//! Reads `word,frequency` rows from a file or from text already in memory.
//! A single bad row rejects the whole catalog.

use super::{Catalog, WordEntry};
use crate::core::Word;
use crate::error::{CatalogLoadError, RowError};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// The only header row accepted, and only on the first line
const HEADER: &str = "word,frequency";

/// Where to read the catalog from
#[derive(Debug, Clone)]
pub enum CatalogSource<'a> {
    Path(PathBuf),
    Text(&'a str),
}

impl From<&Path> for CatalogSource<'_> {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

/// Load a catalog
///
/// # Errors
///
/// Returns `CatalogLoadError` if the source cannot be read, has no rows,
/// or contains a malformed row (wrong word length, non-alphabetic word,
/// negative or non-numeric frequency, repeated word).
///
/// # Examples
/// ```
/// use wordle_alarm::catalog::{CatalogSource, load};
///
/// let catalog = load(&CatalogSource::Text("word,frequency\ncrane,10\nslate,8\n")).unwrap();
/// assert_eq!(catalog.len(), 2);
/// ```
pub fn load(source: &CatalogSource<'_>) -> Result<Catalog, CatalogLoadError> {
    match source {
        CatalogSource::Path(path) => load_from_file(path),
        CatalogSource::Text(text) => parse(text),
    }
}

/// Load a catalog from a file
///
/// # Errors
///
/// Same as [`load`]; I/O failures carry the offending path.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogLoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let catalog = parse(&content)?;
    log::info!("Loaded {} words from {}", catalog.len(), path.display());
    Ok(catalog)
}

fn parse(content: &str) -> Result<Catalog, CatalogLoadError> {
    let mut entries = Vec::new();
    let mut seen = FxHashSet::default();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || (i == 0 && trimmed.eq_ignore_ascii_case(HEADER)) {
            continue;
        }

        let malformed = |source| CatalogLoadError::Malformed { line: i + 1, source };
        let entry = parse_row(trimmed).map_err(malformed)?;
        if !seen.insert(entry.text().to_string()) {
            return Err(malformed(RowError::Duplicate(entry.text().to_string())));
        }
        entries.push(entry);
    }

    if entries.is_empty() {
        return Err(CatalogLoadError::Empty);
    }

    Ok(Catalog::from_entries(entries))
}

fn parse_row(row: &str) -> Result<WordEntry, RowError> {
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    let &[word, frequency] = fields.as_slice() else {
        return Err(RowError::FieldCount(fields.len()));
    };

    let word = Word::new(word).map_err(|source| RowError::Word {
        word: word.to_string(),
        source,
    })?;

    let value: f64 = frequency
        .parse()
        .map_err(|_| RowError::NonNumericFrequency(frequency.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(RowError::InvalidFrequency(frequency.to_string()));
    }

    Ok(WordEntry::new(word, value))
}
