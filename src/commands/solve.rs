//! Word solving command
//!
//! Plays a known answer against the solver on a simulated board and
//! returns the solution path.

use crate::catalog::Catalog;
use crate::config::SolverConfig;
use crate::core::{Guess, PuzzleState, Word};
use crate::solver::{Outcome, Round, Session, SimulatedBoard};
use anyhow::{Context, Result};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    /// Words already on the board; each is scored against the target
    pub played: Vec<String>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            played: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_played(mut self, played: Vec<String>) -> Self {
        self.played = played;
        self
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub outcome: Outcome,
    pub rounds: Vec<Round>,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_solved()
    }
}

/// Solve a specific word with the given catalog and solver settings
///
/// # Errors
///
/// Returns an error if:
/// - The target or a played word is not a valid five-letter word
/// - The opening word is not in the catalog
/// - The candidates run out, which happens when the target is not in the catalog
pub fn solve_word(catalog: &Catalog, solver: &SolverConfig, config: SolveConfig) -> Result<SolveResult> {
    let target = Word::new(config.target.as_str())
        .with_context(|| format!("invalid target word {:?}", config.target))?;

    let played = config
        .played
        .iter()
        .map(|text| {
            Word::new(text.as_str())
                .map(|word| Guess::score(&word, &target))
                .with_context(|| format!("invalid played word {text:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    let state = PuzzleState::from_guesses(played).context("too many played words")?;

    let board = SimulatedBoard::new(target);
    let mut session = if state.guess_count() == 0 {
        Session::new(catalog, solver.clone(), board)?
    } else {
        Session::resume(catalog, solver.clone(), board, state)?
    };

    let outcome = session
        .run()
        .with_context(|| format!("could not solve {}", config.target.to_uppercase()))?;

    Ok(SolveResult {
        target: config.target.to_lowercase(),
        outcome,
        rounds: session.rounds().to_vec(),
    })
}
