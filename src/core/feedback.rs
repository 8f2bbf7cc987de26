//! Feedback scoring and pattern notation
//!
//! Scores a guess against a known answer the way the puzzle does, and
//! converts per-letter states to and from the compact notations people type
//! and share:
//! - `G`/`g`/🟩 = correct
//! - `Y`/`y`/🟨 = present
//! - `-`/`_`/`.`/⬜/⬛ = absent

use super::tile::TileState;
use super::word::{WORD_LEN, Word};
use crate::error::FeedbackParseError;

/// Per-position feedback for one guess
pub type States = [TileState; WORD_LEN];

/// All tiles correct
pub const SOLVED: States = [TileState::Correct; WORD_LEN];

/// Calculate the feedback when `guess` is played and `answer` is the target
///
/// Duplicate letters follow the puzzle's rules: exact matches are marked
/// first and use up their letter, then the remaining letters are marked
/// present left to right while the answer still has unused copies.
///
/// # Examples
/// ```
/// use wordle_alarm::core::{Word, TileState, feedback::evaluate};
///
/// let guess = Word::new("crane").unwrap();
/// let answer = Word::new("slate").unwrap();
/// let states = evaluate(&guess, &answer);
///
/// assert_eq!(states[2], TileState::Correct); // A
/// assert_eq!(states[4], TileState::Correct); // E
/// assert_eq!(states[1], TileState::Absent); // R
/// ```
#[must_use]
pub fn evaluate(guess: &Word, answer: &Word) -> States {
    let mut result = [TileState::Absent; WORD_LEN];
    let mut answer_available = answer.char_counts();

    // Greens first so they claim their letters before any yellow does
    for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
        if g == a {
            result[i] = TileState::Correct;
            if let Some(count) = answer_available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, &letter) in guess.chars().iter().enumerate() {
        if result[i] == TileState::Correct {
            continue;
        }
        if let Some(count) = answer_available.get_mut(&letter)
            && *count > 0
        {
            result[i] = TileState::Present;
            *count -= 1;
        }
    }

    result
}

/// Parse a pattern such as `"GY-GY"` or `"🟩🟨⬜🟩🟨"`
///
/// # Errors
/// Returns `FeedbackParseError::InvalidPattern` if the input is not exactly
/// five recognised symbols.
///
/// # Examples
/// ```
/// use wordle_alarm::core::feedback::parse_pattern;
///
/// let p1 = parse_pattern("GY-GY").unwrap();
/// let p2 = parse_pattern("🟩🟨⬜🟩🟨").unwrap();
/// assert_eq!(p1, p2);
/// ```
pub fn parse_pattern(s: &str) -> Result<States, FeedbackParseError> {
    let invalid = || FeedbackParseError::InvalidPattern(s.to_string());
    let symbols: Vec<char> = s.trim().chars().collect();

    if symbols.len() != WORD_LEN {
        return Err(invalid());
    }

    let mut states = [TileState::Absent; WORD_LEN];
    for (state, symbol) in states.iter_mut().zip(symbols) {
        *state = match symbol {
            'G' | 'g' | '🟩' => TileState::Correct,
            'Y' | 'y' | '🟨' => TileState::Present,
            '-' | '_' | '.' | '⬜' | '⬛' => TileState::Absent,
            _ => return Err(invalid()),
        };
    }

    Ok(states)
}

/// Render states as the emoji row used when sharing results
#[must_use]
pub fn to_emoji(states: &States) -> String {
    states
        .iter()
        .map(|state| match state {
            TileState::Correct => '🟩',
            TileState::Present => '🟨',
            TileState::Absent => '⬜',
        })
        .collect()
}

/// Render states in the typed `G`/`Y`/`-` notation
#[must_use]
pub fn to_letters(states: &States) -> String {
    states
        .iter()
        .map(|state| match state {
            TileState::Correct => 'G',
            TileState::Present => 'Y',
            TileState::Absent => '-',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use TileState::{Absent as A, Correct as C, Present as P};

    fn eval(guess: &str, answer: &str) -> States {
        evaluate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn evaluate_all_absent() {
        assert_eq!(eval("abcde", "fghij"), [A; 5]);
    }

    #[test]
    fn evaluate_all_correct() {
        assert_eq!(eval("crane", "crane"), SOLVED);
    }

    #[test]
    fn evaluate_real_example() {
        assert_eq!(eval("crane", "slate"), [A, A, C, A, C]);
        assert_eq!(eval("crane", "trace"), [P, C, C, A, C]);
    }

    #[test]
    fn evaluate_duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE: both E's present, ERASE has two
        assert_eq!(eval("speed", "erase"), [P, A, P, P, A]);
        // ROBOT vs FLOOR: first O present, second O correct
        assert_eq!(eval("robot", "floor"), [P, P, A, C, A]);
    }

    #[test]
    fn evaluate_extra_copies_are_absent() {
        // Only one L in the answer: the green L claims it
        assert_eq!(eval("llama", "lucky"), [C, A, A, A, A]);
        // Only one E, not in place: leftmost extra copy becomes yellow
        assert_eq!(eval("eerie", "theft"), [P, A, A, A, A]);
    }

    #[test]
    fn parse_pattern_accepts_all_notations() {
        let expected = [C, P, C, A, A];
        assert_eq!(parse_pattern("GYG--"), Ok(expected));
        assert_eq!(parse_pattern("gyg__"), Ok(expected));
        assert_eq!(parse_pattern("🟩🟨🟩⬜⬛"), Ok(expected));
        assert_eq!(parse_pattern(" GYG.. "), Ok(expected));
    }

    #[test]
    fn parse_pattern_rejects_bad_input() {
        assert!(parse_pattern("GYGGYX").is_err());
        assert!(parse_pattern("GYG").is_err());
        assert!(parse_pattern("GXGGY").is_err());
        assert!(parse_pattern("").is_err());
    }

    #[test]
    fn renders_both_notations() {
        let states = [C, P, A, C, P];
        assert_eq!(to_emoji(&states), "🟩🟨⬜🟩🟨");
        assert_eq!(to_letters(&states), "GY-GY");
        assert_eq!(parse_pattern(&to_letters(&states)), Ok(states));
    }
}
