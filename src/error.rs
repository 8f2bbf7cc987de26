//! Error types
//!
//! Every failure the solver can report, grouped by who is at fault:
//! bad catalog data, bad collaborator feedback, contradictory constraints,
//! or an opaque collaborator failure.

use thiserror::Error;

/// A string that cannot be a puzzle word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    #[error("word must contain only ASCII letters")]
    NonAscii,

    #[error("word contains invalid characters")]
    InvalidCharacters,
}

/// Why a single catalog row was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("expected `word,frequency`, found {0} field(s)")]
    FieldCount(usize),

    #[error("invalid word {word:?}: {source}")]
    Word {
        word: String,
        #[source]
        source: WordError,
    },

    #[error("frequency {0:?} is not a number")]
    NonNumericFrequency(String),

    #[error("frequency {0} is negative or not finite")]
    InvalidFrequency(String),

    #[error("word {0:?} appears more than once")]
    Duplicate(String),
}

/// The word catalog could not be loaded. Fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("could not read word catalog {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("word catalog is empty")]
    Empty,

    #[error("malformed catalog row at line {line}")]
    Malformed {
        line: usize,
        #[source]
        source: RowError,
    },
}

/// Feedback from the board collaborator is not a well-formed guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("expected 5 tiles, got {0}")]
    TileCount(usize),

    #[error("invalid tile state {0:?}")]
    InvalidState(String),

    #[error("tile position {0} is outside 1..=5")]
    PositionOutOfRange(usize),

    #[error("tile position {0} appears more than once")]
    DuplicatePosition(usize),

    #[error("tile letter {0:?} is not a lowercase letter")]
    InvalidLetter(char),

    #[error("feedback spells {found:?} but {expected:?} was submitted")]
    WordMismatch { expected: String, found: String },

    #[error("invalid pattern {0:?}, use G/Y/- or 🟩🟨⬜")]
    InvalidPattern(String),
}

/// No candidate word is consistent with the feedback seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no candidate words remain, feedback is contradictory")]
pub struct NoCandidatesError;

/// A guess could not be appended to the puzzle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("the puzzle is already solved")]
    AlreadySolved,

    #[error("the puzzle has already used all 6 guesses")]
    OutOfGuesses,
}

/// A fatal failure of one solving session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("opening word {0:?} is not in the word catalog")]
    UnknownOpeningWord(String),

    #[error("malformed feedback")]
    Feedback(#[from] FeedbackParseError),

    #[error(transparent)]
    NoCandidates(#[from] NoCandidatesError),

    #[error("invalid puzzle update")]
    Puzzle(#[from] PuzzleError),

    #[error("session already finished")]
    Finished,

    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn catalog_error_keeps_row_reason_as_source() {
        let err = CatalogLoadError::Malformed {
            line: 3,
            source: RowError::NonNumericFrequency("abc".to_string()),
        };
        assert_eq!(err.to_string(), "malformed catalog row at line 3");
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "frequency \"abc\" is not a number");
    }

    #[test]
    fn collaborator_error_is_forwarded_as_is() {
        let err = SessionError::from(anyhow::anyhow!("browser timed out"));
        assert_eq!(err.to_string(), "browser timed out");
    }
}
