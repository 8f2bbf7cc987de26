//! Embedded word catalog
//!
//! Compiled into the binary so the solver runs without a catalog file.

/// Default `word,frequency` catalog
pub const DEFAULT_CATALOG: &str = include_str!("../../data/words.csv");
