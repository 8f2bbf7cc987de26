//! Solver configuration
//!
//! Passed explicitly into each session; nothing is read from globals.

/// Opening word used when no configuration overrides it
pub const DEFAULT_OPENING_WORD: &str = "trace";

/// Settings for one solving session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// First guess of every new puzzle; must be in the catalog
    pub opening_word: String,
}

impl SolverConfig {
    #[must_use]
    pub fn new(opening_word: impl Into<String>) -> Self {
        Self {
            opening_word: opening_word.into().to_lowercase(),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OPENING_WORD)
    }
}
