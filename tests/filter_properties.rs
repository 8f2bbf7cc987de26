//! Properties of the constraint filter and guess selector

use proptest::prelude::*;
use std::collections::BTreeSet;
use wordle_alarm::catalog::{Catalog, CatalogSource, load};
use wordle_alarm::core::{Guess, TileState, Word};
use wordle_alarm::solver::{CandidateSet, Constraints, filter, select};

/// Words over a small alphabet so guesses and candidates share letters
fn small_word() -> impl Strategy<Value = String> {
    "[a-e]{5}"
}

fn catalog_of(words: &BTreeSet<String>) -> Catalog {
    let text: String = words
        .iter()
        .enumerate()
        .map(|(i, word)| format!("{word},{}\n", i % 4))
        .collect();
    load(&CatalogSource::Text(&text)).unwrap()
}

fn state() -> impl Strategy<Value = TileState> {
    prop_oneof![
        Just(TileState::Correct),
        Just(TileState::Present),
        Just(TileState::Absent),
    ]
}

proptest! {
    #[test]
    fn filter_output_is_a_subset(
        words in prop::collection::btree_set(small_word(), 1..40),
        guess in small_word(),
        states in prop::array::uniform5(state()),
    ) {
        let catalog = catalog_of(&words);
        let candidates = CandidateSet::full(&catalog);
        let guess = Guess::from_states(&Word::new(guess).unwrap(), states);

        let narrowed = filter(&candidates, &guess);
        prop_assert!(narrowed.len() <= candidates.len());
        for word in narrowed.words() {
            prop_assert!(candidates.contains(word));
        }
    }

    #[test]
    fn filter_is_idempotent(
        words in prop::collection::btree_set(small_word(), 1..40),
        guess in small_word(),
        states in prop::array::uniform5(state()),
    ) {
        let catalog = catalog_of(&words);
        let guess = Guess::from_states(&Word::new(guess).unwrap(), states);

        let once = filter(&CandidateSet::full(&catalog), &guess);
        let twice = filter(&once, &guess);
        prop_assert_eq!(once.words(), twice.words());
    }

    #[test]
    fn real_feedback_keeps_the_answer(
        words in prop::collection::btree_set(small_word(), 1..40),
        guess in small_word(),
        pick in any::<prop::sample::Index>(),
    ) {
        let catalog = catalog_of(&words);
        let answer = &catalog.entries()[pick.index(catalog.len())].word;
        let guess = Guess::score(&Word::new(guess).unwrap(), answer);

        let narrowed = filter(&CandidateSet::full(&catalog), &guess);
        prop_assert!(narrowed.contains(answer.text()));
    }

    #[test]
    fn green_and_gray_copies_pin_the_letter_count(candidate in small_word()) {
        // A correct at 1, A absent at 2: exactly one A, and it sits first
        let guess = Guess::from_states(
            &Word::new("aazzz").unwrap(),
            [
                TileState::Correct,
                TileState::Absent,
                TileState::Absent,
                TileState::Absent,
                TileState::Absent,
            ],
        );
        let word = Word::new(candidate).unwrap();

        let expected = word.char_at(0) == b'a' && word.count_of(b'a') == 1;
        prop_assert_eq!(Constraints::from_guess(&guess).admits(&word), expected);
    }

    #[test]
    fn select_is_deterministic_and_maximal(
        words in prop::collection::btree_set(small_word(), 1..40),
    ) {
        let catalog = catalog_of(&words);
        let candidates = CandidateSet::full(&catalog);

        let first = select(&candidates).unwrap();
        let second = select(&candidates).unwrap();
        prop_assert_eq!(first.text(), second.text());

        let best = candidates
            .iter()
            .map(|entry| entry.frequency)
            .fold(f64::MIN, f64::max);
        prop_assert!((first.frequency - best).abs() < f64::EPSILON);

        // Ties go to the earliest word in catalog order
        let earliest = candidates
            .iter()
            .find(|entry| (entry.frequency - best).abs() < f64::EPSILON)
            .unwrap();
        prop_assert_eq!(first.text(), earliest.text());
    }
}

#[test]
fn select_on_empty_set_fails() {
    let catalog = load(&CatalogSource::Text("crane,10\n")).unwrap();
    let guess = Guess::from_states(&Word::new("crane").unwrap(), [TileState::Absent; 5]);
    let empty = filter(&CandidateSet::full(&catalog), &guess);

    assert!(empty.is_empty());
    assert!(select(&empty).is_err());
}
