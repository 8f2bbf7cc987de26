//! Constraint filter
//!
//! Narrows a candidate set to the words consistent with one guess's
//! feedback. Letters are handled by count, not mere presence, so repeated
//! letters work: guessing LLAMA and seeing one L correct and the other
//! absent means the answer has exactly one L.

use super::candidates::CandidateSet;
use crate::core::{Guess, TileState, WORD_LEN, Word};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PositionRule {
    Is(u8),
    IsNot(u8),
}

/// How many copies of a letter the answer may have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CountRule {
    /// Tiles of this letter marked correct or present
    confirmed: usize,
    /// Some tile of this letter was absent, so there are no more copies
    exact: bool,
}

impl CountRule {
    const fn admits(self, count: usize) -> bool {
        if self.exact {
            count == self.confirmed
        } else {
            count >= self.confirmed
        }
    }
}

/// The rules a single guess imposes on the answer
#[derive(Debug, Clone)]
pub struct Constraints {
    positions: [PositionRule; WORD_LEN],
    counts: FxHashMap<u8, CountRule>,
}

impl Constraints {
    #[must_use]
    pub fn from_guess(guess: &Guess) -> Self {
        let mut counts: FxHashMap<u8, CountRule> = FxHashMap::default();
        let positions = guess.tiles().map(|tile| {
            let rule = counts.entry(tile.letter()).or_insert(CountRule {
                confirmed: 0,
                exact: false,
            });
            match tile.state() {
                TileState::Correct => {
                    rule.confirmed += 1;
                    PositionRule::Is(tile.letter())
                }
                TileState::Present => {
                    rule.confirmed += 1;
                    PositionRule::IsNot(tile.letter())
                }
                // Absent here would have been shown correct had the letter
                // been in this spot
                TileState::Absent => {
                    rule.exact = true;
                    PositionRule::IsNot(tile.letter())
                }
            }
        });

        Self { positions, counts }
    }

    /// Whether `word` could still be the answer
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let positions_ok = self
            .positions
            .iter()
            .zip(word.chars())
            .all(|(rule, &ch)| match *rule {
                PositionRule::Is(letter) => ch == letter,
                PositionRule::IsNot(letter) => ch != letter,
            });

        positions_ok
            && self
                .counts
                .iter()
                .all(|(&letter, rule)| rule.admits(word.count_of(letter)))
    }
}

/// Keep the candidates consistent with `guess`
///
/// The result is a subset of `candidates` in the same order.
#[must_use]
pub fn filter<'c>(candidates: &CandidateSet<'c>, guess: &Guess) -> CandidateSet<'c> {
    let constraints = Constraints::from_guess(guess);
    candidates
        .iter()
        .filter(|entry| constraints.admits(&entry.word))
        .collect()
}

/// Apply [`filter`] for every guess in turn
#[must_use]
pub fn filter_all<'c>(candidates: &CandidateSet<'c>, guesses: &[Guess]) -> CandidateSet<'c> {
    guesses
        .iter()
        .fold(candidates.clone(), |set, guess| filter(&set, guess))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogSource, load};
    use crate::core::RawTile;
    use TileState::{Absent as A, Correct as C, Present as P};

    fn catalog(words: &[&str]) -> Catalog {
        let text: String = words.iter().map(|w| format!("{w},1\n")).collect();
        load(&CatalogSource::Text(&text)).unwrap()
    }

    fn guess(word: &str, states: [TileState; 5]) -> Guess {
        Guess::from_states(&Word::new(word).unwrap(), states)
    }

    fn survivors(words: &[&str], guess: &Guess) -> Vec<String> {
        let catalog = catalog(words);
        let set = filter(&CandidateSet::full(&catalog), guess);
        set.words().into_iter().map(str::to_string).collect()
    }

    #[test]
    fn correct_tile_pins_letter() {
        let g = guess("crane", [A, A, A, A, C]);
        assert_eq!(survivors(&["slate", "trope", "moult", "fluke"], &g), ["fluke"]);
    }

    #[test]
    fn present_tile_requires_letter_elsewhere() {
        let g = guess("crane", [A, A, P, A, A]);
        // "about" has A elsewhere; "staid" has A at position 3; "lousy" has none
        assert_eq!(survivors(&["about", "staid", "lousy"], &g), ["about"]);
    }

    #[test]
    fn absent_tile_excludes_letter() {
        let g = guess("crane", [A, A, A, A, A]);
        assert_eq!(
            survivors(&["built", "movie", "sloth", "trick"], &g),
            ["built", "sloth"]
        );
    }

    #[test]
    fn duplicate_letter_correct_and_absent_means_exactly_one() {
        // LLAMA: first L correct, second L absent
        let g = guess("llama", [C, A, A, A, A]);
        assert_eq!(
            survivors(&["lucky", "lolly", "lefty", "hello"], &g),
            ["lucky", "lefty"]
        );
    }

    #[test]
    fn duplicate_letter_present_and_absent_means_exactly_one() {
        // SPEED: first E present, second E absent
        let g = guess("speed", [A, A, P, A, A]);
        assert_eq!(
            survivors(&["eight", "eerie", "olive", "elect", "theft"], &g),
            ["eight", "olive"]
        );
    }

    #[test]
    fn two_present_copies_require_two() {
        let g = guess("speed", [A, A, P, P, A]);
        assert_eq!(
            survivors(&["eerie", "theft", "erase", "eagle"], &g),
            ["eerie", "eagle"]
        );
    }

    #[test]
    fn absent_copy_is_also_excluded_at_its_position() {
        // One E confirmed at position 1; the absent E at position 5 also
        // rules out an E there
        let g = guess("eerie", [C, A, A, A, A]);
        assert_eq!(survivors(&["ethos", "elope", "empty"], &g), ["ethos", "empty"]);
    }

    #[test]
    fn survivors_keep_catalog_order() {
        let g = guess("crane", [A, A, A, A, A]);
        assert_eq!(
            survivors(&["sloth", "built", "moist"], &g),
            ["sloth", "built", "moist"]
        );
    }

    #[test]
    fn parsed_feedback_filters_like_scored_feedback() {
        let tiles = [
            RawTile::new(1, 'c', "present"),
            RawTile::new(2, 'r', "correct"),
            RawTile::new(3, 'a', "correct"),
            RawTile::new(4, 'n', "absent"),
            RawTile::new(5, 'e', "correct"),
        ];
        let parsed = Guess::parse(&tiles).unwrap();
        assert_eq!(survivors(&["crane", "slate", "trace"], &parsed), ["trace"]);
    }

    #[test]
    fn filter_all_applies_every_guess() {
        let catalog = catalog(&["crane", "slate", "trace", "grace", "brace"]);
        let answer = Word::new("brace").unwrap();
        let guesses = [
            Guess::score(&Word::new("crane").unwrap(), &answer),
            Guess::score(&Word::new("grace").unwrap(), &answer),
        ];

        let set = filter_all(&CandidateSet::full(&catalog), &guesses);
        assert_eq!(set.words(), ["trace", "brace"]);
    }
}
