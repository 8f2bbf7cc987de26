//! Puzzle state: the guesses made so far in one puzzle

use super::guess::Guess;
use crate::error::PuzzleError;

/// Number of guesses allowed per puzzle
pub const MAX_GUESSES: usize = 6;

/// Ordered, append-only record of guesses for one puzzle instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleState {
    guesses: Vec<Guess>,
}

impl PuzzleState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a state from guesses already on the board
    ///
    /// # Errors
    /// Fails if a guess follows a solved one or there are more than six.
    pub fn from_guesses(guesses: impl IntoIterator<Item = Guess>) -> Result<Self, PuzzleError> {
        let mut state = Self::new();
        for guess in guesses {
            state.push(guess)?;
        }
        Ok(state)
    }

    /// Append a completed guess
    ///
    /// # Errors
    /// Returns `PuzzleError::AlreadySolved` or `PuzzleError::OutOfGuesses`
    /// once the puzzle is terminal; the state is left untouched.
    pub fn push(&mut self, guess: Guess) -> Result<(), PuzzleError> {
        if self.is_solved() {
            return Err(PuzzleError::AlreadySolved);
        }
        if self.guesses.len() >= MAX_GUESSES {
            return Err(PuzzleError::OutOfGuesses);
        }
        self.guesses.push(guess);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Guess> {
        self.guesses.last()
    }

    /// The most recent guess has every tile correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.guesses.last().is_some_and(Guess::is_solved)
    }

    /// All six guesses used without solving
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.guesses.len() == MAX_GUESSES && !self.is_solved()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_solved() || self.is_exhausted()
    }
}
