//! Tiles: one letter, its position and its feedback state

use crate::error::FeedbackParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileState {
    /// Right letter, right position
    Correct,
    /// Right letter, wrong position
    Present,
    /// Letter not in the answer, or every occurrence is already accounted for
    Absent,
}

impl TileState {
    /// The name the board uses for this state
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    /// Whether this tile confirms an occurrence of its letter
    #[inline]
    #[must_use]
    pub const fn is_confirmed(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }
}

impl FromStr for TileState {
    type Err = FeedbackParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "correct" => Ok(Self::Correct),
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            other => Err(FeedbackParseError::InvalidState(other.to_string())),
        }
    }
}

impl fmt::Display for TileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated tile within a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    position: usize,
    letter: u8,
    state: TileState,
}

impl Tile {
    pub(crate) const fn new(position: usize, letter: u8, state: TileState) -> Self {
        Self {
            position,
            letter,
            state,
        }
    }

    /// Position within the guess, 1..=5
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Zero-based index of the position
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.position - 1
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> TileState {
        self.state
    }
}

/// A tile as reported by a board collaborator, before validation
///
/// The state is kept as the board's own text (e.g. a `data-state` attribute)
/// and only becomes a [`TileState`] once [`Guess::parse`](super::Guess::parse)
/// accepts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTile {
    pub position: usize,
    pub letter: char,
    pub state: String,
}

impl RawTile {
    pub fn new(position: usize, letter: char, state: impl Into<String>) -> Self {
        Self {
            position,
            letter,
            state: state.into(),
        }
    }
}
