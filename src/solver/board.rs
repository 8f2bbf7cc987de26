//! Collaborators at the edge of the solver
//!
//! The solver never touches a browser, a terminal or a chat service
//! directly. It talks to a [`Board`] to submit guesses and read feedback,
//! and hands its final [`Outcome`] to a [`Notifier`]. Errors from either are
//! passed through untouched.

use super::engine::Outcome;
use crate::core::{Guess, RawTile, Word};
use anyhow::{Result, bail};

/// Something that accepts guesses and reports their feedback
pub trait Board {
    /// Enter a guess on the board
    ///
    /// # Errors
    /// Any failure of the underlying board.
    fn submit_guess(&mut self, word: &Word) -> Result<()>;

    /// Feedback for the most recently submitted guess
    ///
    /// # Errors
    /// Any failure of the underlying board.
    fn read_feedback(&mut self) -> Result<Vec<RawTile>>;
}

impl<B: Board + ?Sized> Board for &mut B {
    fn submit_guess(&mut self, word: &Word) -> Result<()> {
        (**self).submit_guess(word)
    }

    fn read_feedback(&mut self) -> Result<Vec<RawTile>> {
        (**self).read_feedback()
    }
}

/// Something that delivers the final outcome to a person
pub trait Notifier {
    /// # Errors
    /// Any failure delivering the message.
    fn notify(&mut self, outcome: &Outcome) -> Result<()>;
}

/// A board that knows the answer and scores guesses itself
#[derive(Debug, Clone)]
pub struct SimulatedBoard {
    answer: Word,
    submitted: Vec<Word>,
}

impl SimulatedBoard {
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self {
            answer,
            submitted: Vec::new(),
        }
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Every guess submitted so far, in order
    #[must_use]
    pub fn submitted(&self) -> &[Word] {
        &self.submitted
    }
}

impl Board for SimulatedBoard {
    fn submit_guess(&mut self, word: &Word) -> Result<()> {
        self.submitted.push(word.clone());
        Ok(())
    }

    fn read_feedback(&mut self) -> Result<Vec<RawTile>> {
        let Some(word) = self.submitted.last() else {
            bail!("no guess has been submitted");
        };
        Ok(Guess::score(word, &self.answer).to_raw())
    }
}
