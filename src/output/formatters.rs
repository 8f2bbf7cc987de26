//! Formatting utilities for terminal output

use crate::core::{Guess, TileState};
use colored::{ColoredString, Colorize};

/// A guess as coloured letter tiles, e.g. ` C  R  A  N  E `
#[must_use]
pub fn colored_tiles(guess: &Guess) -> String {
    guess
        .tiles()
        .iter()
        .map(|tile| {
            let letter = format!(" {} ", char::from(tile.letter()).to_ascii_uppercase());
            tile_color(tile.state(), &letter).to_string()
        })
        .collect()
}

fn tile_color(state: TileState, text: &str) -> ColoredString {
    match state {
        TileState::Correct => text.black().on_green().bold(),
        TileState::Present => text.black().on_yellow().bold(),
        TileState::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "guess" or "guesses"
#[must_use]
pub const fn guesses_noun(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
