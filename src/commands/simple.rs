//! Simple interactive CLI mode
//!
//! The solver suggests each guess; the player types it into the real puzzle
//! and reports the colours back.

use crate::catalog::Catalog;
use crate::config::SolverConfig;
use crate::core::feedback::{SOLVED, parse_pattern, to_emoji};
use crate::core::{Guess, PuzzleState, RawTile, Word};
use crate::solver::{Board, Outcome, Phase, Session};
use anyhow::{Context, Result, anyhow, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidates are listed once this few remain
const LIST_LIMIT: usize = 10;

/// A board operated by a person at the terminal
pub struct ConsoleBoard<R: BufRead, W: Write> {
    input: R,
    output: W,
    current: Option<Word>,
    turn: usize,
}

impl<R: BufRead, W: Write> ConsoleBoard<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            current: None,
            turn: 0,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Board for ConsoleBoard<R, W> {
    fn submit_guess(&mut self, word: &Word) -> Result<()> {
        self.turn += 1;
        writeln!(self.output, "{}", "─".repeat(60))?;
        writeln!(
            self.output,
            "Turn {}: play {}",
            self.turn,
            word.text().to_uppercase().bright_yellow().bold()
        )?;
        self.current = Some(word.clone());
        Ok(())
    }

    fn read_feedback(&mut self) -> Result<Vec<RawTile>> {
        let word = self
            .current
            .clone()
            .ok_or_else(|| anyhow!("no guess has been submitted"))?;

        let states = loop {
            let input = self.prompt("Enter feedback (G/Y/-, 'win' or 'quit')")?;

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => bail!("stopped by player"),
                "win" | "correct" | "solved" => break SOLVED,
                _ => match parse_pattern(&input) {
                    Ok(states) => break states,
                    Err(e) => writeln!(self.output, "❌ {e}")?,
                },
            }
        };

        writeln!(self.output, "   {} {}", word.text().to_uppercase(), to_emoji(&states))?;
        Ok(Guess::from_states(&word, states).to_raw())
    }
}

/// Parse a resumed guess written as `WORD=PATTERN`, e.g. `crane=-YG--`
///
/// # Errors
/// Returns an error if either half is malformed.
pub fn parse_played(text: &str) -> Result<Guess> {
    let (word, pattern) = text
        .split_once('=')
        .with_context(|| format!("expected WORD=PATTERN, got {text:?}"))?;
    let word = Word::new(word.trim()).with_context(|| format!("invalid word in {text:?}"))?;
    let states = parse_pattern(pattern.trim())?;
    Ok(Guess::from_states(&word, states))
}

/// Run the solver against a person-operated board until the puzzle ends
///
/// # Errors
/// Returns an error on I/O failure, if the player quits, or if their
/// feedback leaves no candidate.
pub fn run_simple_with<R: BufRead, W: Write>(
    catalog: &Catalog,
    config: &SolverConfig,
    played: Vec<Guess>,
    mut board: ConsoleBoard<R, W>,
) -> Result<(Outcome, ConsoleBoard<R, W>)> {
    let state = PuzzleState::from_guesses(played).context("too many played guesses")?;
    board.turn = state.guess_count();
    let mut session = if state.guess_count() == 0 {
        Session::new(catalog, config.clone(), board)?
    } else {
        Session::resume(catalog, config.clone(), board, state)?
    };

    loop {
        if let Some(outcome) = session.outcome() {
            return Ok((outcome, session.into_board()));
        }

        if session.step()? == Phase::AwaitingFeedback {
            let words = session.candidates().words();
            let count = words.len();
            let listing = if count <= LIST_LIMIT {
                format!(": {}", words.join(", ").to_uppercase())
            } else {
                String::new()
            };
            log::info!("{count} candidates remain{listing}");
        }
    }
}

/// Run the simple interactive CLI mode on stdin and stdout
///
/// # Errors
/// See [`run_simple_with`].
pub fn run_simple(catalog: &Catalog, config: &SolverConfig, played: Vec<Guess>) -> Result<Outcome> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Solver - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");

    let board = ConsoleBoard::new(io::stdin().lock(), io::stdout());
    let (outcome, _) = run_simple_with(catalog, config, played, board)?;
    Ok(outcome)
}
