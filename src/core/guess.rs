//! A submitted word together with its per-letter feedback

use super::feedback::{self, States};
use super::tile::{RawTile, Tile, TileState};
use super::word::{WORD_LEN, Word};
use crate::error::FeedbackParseError;
use std::fmt;

/// One guess: exactly five tiles, one per position 1..=5, in position order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    word: Word,
    tiles: [Tile; WORD_LEN],
}

impl Guess {
    /// Build a guess from a word and the state of each of its letters
    #[must_use]
    pub fn from_states(word: &Word, states: States) -> Self {
        let tiles = std::array::from_fn(|i| Tile::new(i + 1, word.char_at(i), states[i]));
        Self {
            word: word.clone(),
            tiles,
        }
    }

    /// Score `word` against a known `answer`
    #[must_use]
    pub fn score(word: &Word, answer: &Word) -> Self {
        Self::from_states(word, feedback::evaluate(word, answer))
    }

    /// Validate tiles reported by a board collaborator
    ///
    /// Tiles may arrive in any order; the result is in position order.
    /// Letters are lowercased.
    ///
    /// # Errors
    /// Fails with `FeedbackParseError` when there are not exactly five tiles,
    /// a position is outside 1..=5 or repeated, a letter is not alphabetic,
    /// or a state is not one of `correct`/`present`/`absent`.
    pub fn parse(raw: &[RawTile]) -> Result<Self, FeedbackParseError> {
        if raw.len() != WORD_LEN {
            return Err(FeedbackParseError::TileCount(raw.len()));
        }

        let mut seen = [false; WORD_LEN];
        let mut tiles = Vec::with_capacity(WORD_LEN);
        for tile in raw {
            if !(1..=WORD_LEN).contains(&tile.position) {
                return Err(FeedbackParseError::PositionOutOfRange(tile.position));
            }
            if std::mem::replace(&mut seen[tile.position - 1], true) {
                return Err(FeedbackParseError::DuplicatePosition(tile.position));
            }

            let letter = tile.letter.to_ascii_lowercase();
            if !letter.is_ascii_lowercase() {
                return Err(FeedbackParseError::InvalidLetter(tile.letter));
            }
            let state: TileState = tile.state.parse()?;

            tiles.push(Tile::new(tile.position, letter as u8, state));
        }
        tiles.sort_by_key(Tile::position);

        let tiles: [Tile; WORD_LEN] = tiles
            .try_into()
            .map_err(|tiles: Vec<Tile>| FeedbackParseError::TileCount(tiles.len()))?;
        let word = Word::from_letters(tiles.map(|tile| tile.letter()));

        Ok(Self { word, tiles })
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Tiles in position order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LEN] {
        &self.tiles
    }

    #[must_use]
    pub fn states(&self) -> States {
        self.tiles.map(|tile| tile.state())
    }

    /// Whether every tile is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .all(|tile| tile.state() == TileState::Correct)
    }

    /// The tiles in the form a board collaborator reports them
    #[must_use]
    pub fn to_raw(&self) -> Vec<RawTile> {
        self.tiles
            .iter()
            .map(|tile| {
                RawTile::new(
                    tile.position(),
                    char::from(tile.letter()),
                    tile.state().as_str(),
                )
            })
            .collect()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, feedback::to_emoji(&self.states()))
    }
}
