//! Outcome notifiers
//!
//! Deliver a finished puzzle's summary: a coloured alert line for a human
//! at the terminal, or one JSON object per outcome for whatever relays it
//! onwards (a chat bot, a cron mail).

use super::formatters::guesses_noun;
use crate::core::MAX_GUESSES;
use crate::solver::{Notifier, Outcome, OutcomeKind};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;

/// The alert text for an outcome
#[must_use]
pub fn summary(outcome: &Outcome) -> String {
    match (&outcome.outcome, &outcome.solution) {
        (OutcomeKind::Solved, Some(word)) => format!(
            "Wordle solved in {}/{MAX_GUESSES} {}: {}",
            outcome.guesses_used,
            guesses_noun(outcome.guesses_used),
            word.to_uppercase()
        ),
        (OutcomeKind::Solved, None) => format!(
            "Wordle solved in {}/{MAX_GUESSES} {}",
            outcome.guesses_used,
            guesses_noun(outcome.guesses_used)
        ),
        (OutcomeKind::Exhausted, _) => {
            format!("Wordle not solved after {} guesses!", outcome.guesses_used)
        }
    }
}

/// Writes a coloured alert line
pub struct ConsoleNotifier<W: Write> {
    out: W,
}

impl<W: Write> ConsoleNotifier<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, outcome: &Outcome) -> Result<()> {
        let text = summary(outcome);
        let line = if outcome.is_solved() {
            format!("✅ {text}").green().bold()
        } else {
            format!("🚨 {text} 🚨").red().bold()
        };
        writeln!(self.out, "{line}").context("failed to write outcome")?;
        log::info!("{text}. Alert sent.");
        Ok(())
    }
}

/// Writes each outcome as a single line of JSON
pub struct JsonNotifier<W: Write> {
    out: W,
}

impl<W: Write> JsonNotifier<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for JsonNotifier<W> {
    fn notify(&mut self, outcome: &Outcome) -> Result<()> {
        serde_json::to_writer(&mut self.out, outcome).context("failed to encode outcome")?;
        writeln!(self.out).context("failed to write outcome")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved(guesses_used: usize) -> Outcome {
        Outcome {
            outcome: OutcomeKind::Solved,
            guesses_used,
            solution: Some("trace".to_string()),
        }
    }

    fn exhausted() -> Outcome {
        Outcome {
            outcome: OutcomeKind::Exhausted,
            guesses_used: 6,
            solution: None,
        }
    }

    #[test]
    fn summary_text() {
        assert_eq!(summary(&solved(1)), "Wordle solved in 1/6 guess: TRACE");
        assert_eq!(summary(&solved(4)), "Wordle solved in 4/6 guesses: TRACE");
        assert_eq!(summary(&exhausted()), "Wordle not solved after 6 guesses!");
    }

    #[test]
    fn console_notifier_writes_summary() {
        colored::control::set_override(false);
        let mut notifier = ConsoleNotifier::new(Vec::new());
        notifier.notify(&solved(3)).unwrap();

        let text = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(text, "✅ Wordle solved in 3/6 guesses: TRACE\n");
    }

    #[test]
    fn json_notifier_writes_one_line_per_outcome() {
        let mut notifier = JsonNotifier::new(Vec::new());
        notifier.notify(&solved(2)).unwrap();
        notifier.notify(&exhausted()).unwrap();

        let text = String::from_utf8(notifier.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                r#"{"outcome":"solved","guesses_used":2,"solution":"trace"}"#,
                r#"{"outcome":"exhausted","guesses_used":6,"solution":null}"#,
            ]
        );
    }
}
