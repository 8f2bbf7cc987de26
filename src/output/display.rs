//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar, guesses_noun};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::MAX_GUESSES;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in result.rounds.iter().enumerate() {
        println!("\nTurn {}: {}", i + 1, colored_tiles(&round.guess));

        match round.candidates_after {
            Some(after) => println!(
                "  Candidates: {} → {after}",
                round.candidates_before
            ),
            None => println!("  Candidates: {}", round.candidates_before),
        }
    }

    println!();
    let used = result.outcome.guesses_used;
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {used} {}!", guesses_noun(used))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {used} guesses").red().bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        result.solved.to_string().green()
    );
    println!(
        "   Not solved:       {}",
        result.exhausted.to_string().yellow()
    );
    if !result.failed.is_empty() {
        println!(
            "   Halted:           {}",
            result.failed.len().to_string().red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=MAX_GUESSES {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
    if result.exhausted > 0 {
        let pct = (result.exhausted as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   X: {} {:4} ({pct:5.1}%)", bar.red(), result.exhausted);
    }

    if !result.hardest.is_empty() {
        println!("\n🧩 {}", "Hardest words:".bright_cyan().bold());
        for (word, guesses) in &result.hardest {
            let shown = if *guesses > MAX_GUESSES {
                "X".to_string()
            } else {
                guesses.to_string()
            };
            println!("   {} {shown}", word.to_uppercase());
        }
    }

    for (word, reason) in &result.failed {
        println!("   {} {}", word.to_uppercase().red(), reason.bright_black());
    }
}
