//! Benchmark command
//!
//! Plays every target word (or a seeded sample) on simulated boards in
//! parallel and summarises how the solver fared.

use crate::catalog::Catalog;
use crate::config::SolverConfig;
use crate::core::Word;
use crate::solver::{Session, SimulatedBoard};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How many of the slowest words to report
const HARDEST_SHOWN: usize = 10;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: usize,
    /// Sessions that halted with an error
    pub failed: Vec<(String, String)>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guesses used by solved puzzles, keyed by guess count
    pub distribution: BTreeMap<usize, usize>,
    /// Words that needed the most guesses, unsolved ones first
    pub hardest: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick benchmark targets from the catalog
///
/// `None` takes every word in catalog order. A count takes a random sample,
/// reproducible when a seed is given.
#[must_use]
pub fn pick_targets(catalog: &Catalog, count: Option<usize>, seed: Option<u64>) -> Vec<Word> {
    let entries = catalog.entries();
    let Some(count) = count.filter(|&n| n < entries.len()) else {
        return entries.iter().map(|entry| entry.word.clone()).collect();
    };

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut picked = sample(&mut rng, entries.len(), count).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| entries[i].word.clone()).collect()
}

enum Played {
    Solved(usize),
    Exhausted(usize),
    Failed(String),
}

fn play(catalog: &Catalog, config: &SolverConfig, target: &Word) -> Played {
    let board = SimulatedBoard::new(target.clone());
    let result = Session::new(catalog, config.clone(), board).and_then(|mut session| session.run());

    match result {
        Ok(outcome) if outcome.is_solved() => Played::Solved(outcome.guesses_used),
        Ok(outcome) => Played::Exhausted(outcome.guesses_used),
        Err(e) => Played::Failed(e.to_string()),
    }
}

/// Run benchmark on a set of target words
pub fn run_benchmark(
    catalog: &Catalog,
    config: &SolverConfig,
    targets: &[Word],
    show_progress: bool,
) -> BenchmarkResult {
    let progress = if show_progress {
        let bar = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
        ) {
            bar.set_style(style.progress_chars("█▓░"));
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let played: Vec<(&Word, Played)> = targets
        .par_iter()
        .map(|target| {
            let result = play(catalog, config, target);
            progress.inc(1);
            (target, result)
        })
        .collect();
    let duration = start.elapsed();
    progress.finish_and_clear();

    let mut solved = 0;
    let mut exhausted = 0;
    let mut failed = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution = BTreeMap::new();
    let mut ranked = Vec::new();

    for (target, result) in played {
        let guesses = match result {
            Played::Solved(guesses) => {
                solved += 1;
                *distribution.entry(guesses).or_insert(0) += 1;
                guesses
            }
            // Unsolved puzzles score one over the limit
            Played::Exhausted(guesses) => {
                exhausted += 1;
                guesses + 1
            }
            Played::Failed(reason) => {
                log::warn!("{} halted: {reason}", target.text().to_uppercase());
                failed.push((target.text().to_string(), reason));
                continue;
            }
        };
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        ranked.push((target.text().to_string(), guesses));
    }

    // Stable sort keeps catalog order among equals
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(HARDEST_SHOWN);

    let played_count = solved + exhausted;
    let total_words = targets.len();
    log::info!(
        "Benchmarked {total_words} words in {:.2}s: {solved} solved, {exhausted} exhausted, {} failed",
        duration.as_secs_f64(),
        failed.len()
    );

    BenchmarkResult {
        total_words,
        solved,
        exhausted,
        failed,
        average_guesses: if played_count == 0 {
            0.0
        } else {
            total_guesses as f64 / played_count as f64
        },
        min_guesses: if played_count == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        hardest: ranked,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
