//! Solver loop
//!
//! Drives one puzzle from the opening guess to a solved or exhausted
//! board: read feedback, record it, narrow the candidates, pick and submit
//! the next guess.

use super::board::Board;
use super::candidates::CandidateSet;
use super::filter::filter;
use super::select::select;
use crate::catalog::Catalog;
use crate::config::SolverConfig;
use crate::core::{Guess, MAX_GUESSES, PuzzleState, Word};
use crate::error::{FeedbackParseError, SessionError};
use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing submitted yet
    AwaitingFirstGuess,
    /// A guess is on the board and its feedback has not been read
    AwaitingFeedback,
    /// The last guess was all correct
    Solved,
    /// Six guesses used without solving
    Exhausted,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Solved,
    Exhausted,
}

/// Summary of a finished puzzle, for delivery to a person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub outcome: OutcomeKind,
    pub guesses_used: usize,
    pub solution: Option<String>,
}

impl Outcome {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.outcome, OutcomeKind::Solved)
    }
}

/// One recorded guess and how it narrowed the candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Guess,
    /// Candidates when this guess was chosen
    pub candidates_before: usize,
    /// Candidates after applying its feedback; `None` once the puzzle ended
    pub candidates_after: Option<usize>,
}

/// One puzzle-solving session
///
/// Owns its puzzle state and candidate set; borrows the shared catalog.
pub struct Session<'c, B: Board> {
    catalog: &'c Catalog,
    config: SolverConfig,
    board: B,
    state: PuzzleState,
    candidates: CandidateSet<'c>,
    phase: Phase,
    pending: Option<Word>,
    rounds: Vec<Round>,
    failed: bool,
}

impl<'c, B: Board> Session<'c, B> {
    /// Create a session for a fresh puzzle
    ///
    /// # Errors
    /// Returns `SessionError::UnknownOpeningWord` if the configured opening
    /// word is not in the catalog.
    pub fn new(catalog: &'c Catalog, config: SolverConfig, board: B) -> Result<Self, SessionError> {
        if !catalog.contains(&config.opening_word) {
            return Err(SessionError::UnknownOpeningWord(config.opening_word));
        }

        Ok(Self {
            catalog,
            config,
            board,
            state: PuzzleState::new(),
            candidates: CandidateSet::full(catalog),
            phase: Phase::AwaitingFirstGuess,
            pending: None,
            rounds: Vec::new(),
            failed: false,
        })
    }

    /// Continue a puzzle that already has guesses on the board
    ///
    /// Replays the filter over every recorded guess. If the puzzle is still
    /// open the next guess is selected and submitted straight away.
    ///
    /// # Errors
    /// Fails like [`Session::new`], or with `NoCandidates` if the recorded
    /// guesses contradict each other, or if the board rejects the guess.
    pub fn resume(
        catalog: &'c Catalog,
        config: SolverConfig,
        board: B,
        state: PuzzleState,
    ) -> Result<Self, SessionError> {
        let mut session = Self::new(catalog, config, board)?;

        for guess in state.guesses() {
            session.record(guess.clone())?;
        }
        log::info!(
            "Resumed puzzle after {} guess(es), {} candidates remain",
            session.state.guess_count(),
            session.candidates.len()
        );

        if session.phase == Phase::AwaitingFirstGuess && session.state.guess_count() > 0 {
            session.submit_next()?;
        }
        Ok(session)
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &PuzzleState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet<'c> {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// The guess on the board awaiting feedback
    #[inline]
    #[must_use]
    pub const fn pending(&self) -> Option<&Word> {
        self.pending.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &B {
        &self.board
    }

    #[must_use]
    pub fn into_board(self) -> B {
        self.board
    }

    /// The terminal summary, once the puzzle is solved or exhausted
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        let outcome = match self.phase {
            Phase::Solved => OutcomeKind::Solved,
            Phase::Exhausted => OutcomeKind::Exhausted,
            Phase::AwaitingFirstGuess | Phase::AwaitingFeedback => return None,
        };

        Some(Outcome {
            outcome,
            guesses_used: self.state.guess_count(),
            solution: self
                .state
                .last()
                .filter(|guess| guess.is_solved())
                .map(|guess| guess.word().text().to_string()),
        })
    }

    /// Advance the session by one transition
    ///
    /// From `AwaitingFirstGuess` this submits the opening word. From
    /// `AwaitingFeedback` it reads and records the feedback, then either
    /// finishes or submits the next guess.
    ///
    /// # Errors
    /// Any error is fatal: the session refuses further steps with
    /// `SessionError::Finished`, as it does once terminal.
    pub fn step(&mut self) -> Result<Phase, SessionError> {
        if self.failed || self.phase.is_terminal() {
            return Err(SessionError::Finished);
        }

        let result = match self.phase {
            Phase::AwaitingFirstGuess => self.submit_opening(),
            _ => self.cycle(),
        };

        match result {
            Ok(()) => Ok(self.phase),
            Err(err) => {
                log::error!("Session halted: {err}");
                self.failed = true;
                Err(err)
            }
        }
    }

    /// Step until the puzzle is solved or exhausted
    ///
    /// # Errors
    /// The first error from [`Session::step`].
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        loop {
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
            self.step()?;
        }
    }

    fn submit_opening(&mut self) -> Result<(), SessionError> {
        let entry = self
            .catalog
            .get(&self.config.opening_word)
            .ok_or_else(|| SessionError::UnknownOpeningWord(self.config.opening_word.clone()))?;
        self.submit(entry.word.clone())
    }

    fn submit_next(&mut self) -> Result<(), SessionError> {
        let entry = select(&self.candidates)?;
        self.submit(entry.word.clone())
    }

    fn submit(&mut self, word: Word) -> Result<(), SessionError> {
        log::info!(
            "Guess {}: {} ({} candidates)",
            self.state.guess_count() + 1,
            word,
            self.candidates.len()
        );
        self.board.submit_guess(&word)?;
        self.pending = Some(word);
        self.phase = Phase::AwaitingFeedback;
        Ok(())
    }

    fn cycle(&mut self) -> Result<(), SessionError> {
        let raw = self.board.read_feedback()?;
        let guess = Guess::parse(&raw)?;

        if let Some(expected) = &self.pending
            && guess.word() != expected
        {
            return Err(FeedbackParseError::WordMismatch {
                expected: expected.text().to_string(),
                found: guess.word().text().to_string(),
            }
            .into());
        }

        self.record(guess)?;
        self.pending = None;

        if self.phase.is_terminal() {
            Ok(())
        } else {
            self.submit_next()
        }
    }

    /// Append a guess, then finish the puzzle or narrow the candidates
    fn record(&mut self, guess: Guess) -> Result<(), SessionError> {
        let candidates_before = self.candidates.len();
        self.state.push(guess.clone())?;
        log::debug!("Feedback {guess}");

        let candidates_after = if self.state.is_solved() {
            log::info!(
                "Solved {} in {} guess(es)",
                guess.word(),
                self.state.guess_count()
            );
            self.phase = Phase::Solved;
            None
        } else if self.state.guess_count() == MAX_GUESSES {
            log::warn!("Failed to solve in {MAX_GUESSES} guesses");
            self.phase = Phase::Exhausted;
            None
        } else {
            self.candidates = filter(&self.candidates, &guess);
            log::debug!(
                "Filtered {candidates_before} -> {} candidates",
                self.candidates.len()
            );
            Some(self.candidates.len())
        };

        self.rounds.push(Round {
            guess,
            candidates_before,
            candidates_after,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, load};
    use crate::core::{RawTile, TileState};
    use crate::error::NoCandidatesError;
    use crate::solver::board::SimulatedBoard;
    use anyhow::anyhow;
    use std::collections::VecDeque;

    fn catalog(text: &str) -> Catalog {
        load(&CatalogSource::Text(text)).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    /// Board that replays scripted feedback and records submissions
    #[derive(Default)]
    struct ScriptedBoard {
        feedback: VecDeque<anyhow::Result<Vec<RawTile>>>,
        submitted: Vec<String>,
    }

    impl ScriptedBoard {
        fn push(mut self, word: &str, states: [&str; 5]) -> Self {
            let tiles = word
                .chars()
                .zip(states)
                .enumerate()
                .map(|(i, (letter, state))| RawTile::new(i + 1, letter, state))
                .collect();
            self.feedback.push_back(Ok(tiles));
            self
        }
    }

    impl Board for ScriptedBoard {
        fn submit_guess(&mut self, word: &Word) -> anyhow::Result<()> {
            self.submitted.push(word.text().to_string());
            Ok(())
        }

        fn read_feedback(&mut self) -> anyhow::Result<Vec<RawTile>> {
            self.feedback
                .pop_front()
                .unwrap_or_else(|| Err(anyhow!("board went away")))
        }
    }

    #[test]
    fn new_session_rejects_unknown_opening_word() {
        let catalog = catalog("crane,10\nslate,8\n");
        let result = Session::new(&catalog, SolverConfig::new("trace"), ScriptedBoard::default());
        assert!(matches!(result, Err(SessionError::UnknownOpeningWord(w)) if w == "trace"));
    }

    #[test]
    fn opening_word_submitted_first() {
        let catalog = catalog("crane,10\nslate,8\ntrace,5\n");
        let mut session =
            Session::new(&catalog, SolverConfig::new("slate"), ScriptedBoard::default()).unwrap();
        assert_eq!(session.phase(), Phase::AwaitingFirstGuess);

        assert_eq!(session.step().unwrap(), Phase::AwaitingFeedback);
        assert_eq!(session.pending().map(Word::text), Some("slate"));
        assert_eq!(session.board().submitted, ["slate"]);
    }

    #[test]
    fn narrows_and_selects_next_guess() {
        let catalog = catalog("crane,10\nslate,8\ntrace,5\n");
        let board = ScriptedBoard::default().push(
            "crane",
            ["present", "correct", "correct", "absent", "correct"],
        );
        let mut session = Session::new(&catalog, SolverConfig::new("crane"), board).unwrap();

        session.step().unwrap();
        assert_eq!(session.step().unwrap(), Phase::AwaitingFeedback);

        assert_eq!(session.candidates().words(), ["trace"]);
        assert_eq!(session.board().submitted, ["crane", "trace"]);
        assert_eq!(session.rounds()[0].candidates_before, 3);
        assert_eq!(session.rounds()[0].candidates_after, Some(1));
    }

    #[test]
    fn all_correct_first_guess_is_solved() {
        let catalog = catalog("crane,10\nslate,8\ntrace,5\n");
        let board = ScriptedBoard::default().push("crane", ["correct"; 5]);
        let mut session = Session::new(&catalog, SolverConfig::new("crane"), board).unwrap();

        let outcome = session.run().unwrap();
        assert_eq!(
            outcome,
            Outcome {
                outcome: OutcomeKind::Solved,
                guesses_used: 1,
                solution: Some("crane".to_string()),
            }
        );
        assert_eq!(session.phase(), Phase::Solved);
        assert!(matches!(session.step(), Err(SessionError::Finished)));
    }

    #[test]
    fn six_misses_exhaust_the_puzzle() {
        let catalog =
            catalog("aaaaa,6\nbbbbb,5\nccccc,4\nddddd,3\neeeee,2\nfffff,1\nggggg,0\n");
        let board = ["aaaaa", "bbbbb", "ccccc", "ddddd", "eeeee", "fffff"]
            .into_iter()
            .fold(ScriptedBoard::default(), |board, w| board.push(w, ["absent"; 5]));
        let mut session = Session::new(&catalog, SolverConfig::new("aaaaa"), board).unwrap();

        let outcome = session.run().unwrap();
        assert_eq!(outcome.outcome, OutcomeKind::Exhausted);
        assert_eq!(outcome.guesses_used, 6);
        assert_eq!(outcome.solution, None);
        assert_eq!(session.board().submitted.len(), 6);
        assert_eq!(session.rounds()[5].candidates_after, None);
    }

    #[test]
    fn malformed_feedback_halts_without_recording() {
        let catalog = catalog("crane,10\nslate,8\n");
        let board = ScriptedBoard::default().push(
            "crane",
            ["absent", "absent", "maybe", "absent", "absent"],
        );
        let mut session = Session::new(&catalog, SolverConfig::new("crane"), board).unwrap();

        session.step().unwrap();
        let err = session.step().unwrap_err();
        assert!(matches!(
            err,
            SessionError::Feedback(FeedbackParseError::InvalidState(_))
        ));
        assert_eq!(session.state().guess_count(), 0);
        assert!(matches!(session.step(), Err(SessionError::Finished)));
    }

    #[test]
    fn feedback_for_another_word_is_rejected() {
        let catalog = catalog("crane,10\nslate,8\n");
        let board = ScriptedBoard::default().push("slate", ["absent"; 5]);
        let mut session = Session::new(&catalog, SolverConfig::new("crane"), board).unwrap();

        session.step().unwrap();
        assert!(matches!(
            session.step(),
            Err(SessionError::Feedback(FeedbackParseError::WordMismatch { .. }))
        ));
        assert_eq!(session.state().guess_count(), 0);
    }

    #[test]
    fn contradictory_feedback_is_fatal() {
        let catalog = catalog("crane,10\nslate,8\n");
        // Claims no letter of CRANE is in the answer, and SLATE has A and E
        let board = ScriptedBoard::default().push("crane", ["absent"; 5]);
        let mut session = Session::new(&catalog, SolverConfig::new("crane"), board).unwrap();

        session.step().unwrap();
        assert!(matches!(
            session.step(),
            Err(SessionError::NoCandidates(NoCandidatesError))
        ));
    }

    #[test]
    fn collaborator_errors_pass_through() {
        let catalog = catalog("crane,10\n");
        let mut session =
            Session::new(&catalog, SolverConfig::new("crane"), ScriptedBoard::default()).unwrap();

        session.step().unwrap();
        let err = session.step().unwrap_err();
        assert!(matches!(err, SessionError::Collaborator(_)));
        assert_eq!(err.to_string(), "board went away");
    }

    #[test]
    fn simulated_board_reaches_the_answer() {
        let catalog = catalog("crane,10\nslate,8\ntrace,5\ngrace,4\nbrace,3\n");
        let board = SimulatedBoard::new(word("brace"));
        let mut session = Session::new(&catalog, SolverConfig::new("crane"), board).unwrap();

        let outcome = session.run().unwrap();
        assert!(outcome.is_solved());
        assert_eq!(outcome.solution.as_deref(), Some("brace"));

        let played: Vec<&str> = session.board().submitted().iter().map(Word::text).collect();
        assert_eq!(played, ["crane", "trace", "grace", "brace"]);
    }

    #[test]
    fn resume_replays_recorded_guesses() {
        let catalog = catalog("crane,10\nslate,8\ntrace,5\n");
        let state = PuzzleState::from_guesses([Guess::score(&word("crane"), &word("trace"))]).unwrap();

        let session = Session::resume(
            &catalog,
            SolverConfig::default(),
            ScriptedBoard::default(),
            state,
        )
        .unwrap();

        assert_eq!(session.phase(), Phase::AwaitingFeedback);
        assert_eq!(session.candidates().words(), ["trace"]);
        assert_eq!(session.board().submitted, ["trace"]);
    }

    #[test]
    fn resume_of_solved_board_is_terminal() {
        let catalog = catalog("crane,10\ntrace,5\n");
        let state = PuzzleState::from_guesses([Guess::from_states(
            &word("trace"),
            [TileState::Correct; 5],
        )])
        .unwrap();

        let mut session = Session::resume(
            &catalog,
            SolverConfig::default(),
            ScriptedBoard::default(),
            state,
        )
        .unwrap();

        assert_eq!(session.run().unwrap().guesses_used, 1);
        assert!(session.board().submitted.is_empty());
    }
}
