//! Wordle Alarm - CLI
//!
//! Solves the daily puzzle by constraint filtering, either against a known
//! answer or interactively with the player reporting each guess's colours.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;
use wordle_alarm::{
    catalog::{Catalog, CatalogSource, load},
    commands::{
        ConfigQuery, SolveConfig, config_values, parse_played, pick_targets, run_benchmark,
        run_simple, solve_word,
    },
    config::{DEFAULT_OPENING_WORD, SolverConfig},
    output::{ConsoleNotifier, JsonNotifier, print_benchmark_result, print_solve_result},
    solver::{Notifier, Outcome},
};

#[derive(Parser)]
#[command(
    name = "wordle_alarm",
    about = "Daily Wordle solver: narrows candidates from feedback and plays the most common survivor",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word catalog CSV with `word,frequency` rows (default: built-in list)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// First guess of every new puzzle
    #[arg(short, long, global = true, default_value = DEFAULT_OPENING_WORD)]
    opening: String,

    /// Log more (-v info, -vv debug, -vvv trace); `RUST_LOG` overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Report the final outcome as a JSON line
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple CLI mode (default: you play the suggested guesses and report colours)
    Simple {
        /// A guess already on the board, as WORD=PATTERN (e.g. crane=-YG--)
        #[arg(short, long = "played", value_name = "WORD=PATTERN")]
        played: Vec<String>,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// A word already played, scored against the target
        #[arg(short, long = "played", value_name = "WORD")]
        played: Vec<String>,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random words to test (default: every catalog word)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for the random sample
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print build metadata
    Config {
        /// Print every key as key=value
        #[arg(long)]
        all: bool,

        /// Print the project name
        #[arg(long)]
        project_name: bool,

        /// Print the project version
        #[arg(long)]
        project_version: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => load(&CatalogSource::from(path.as_path()))
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Catalog::embedded().context("built-in catalog is invalid"),
    }
}

fn notify(outcome: &Outcome, json: bool) -> Result<()> {
    if json {
        JsonNotifier::new(io::stdout().lock()).notify(outcome)
    } else {
        ConsoleNotifier::new(io::stdout().lock()).notify(outcome)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Simple { played: Vec::new() });

    if let Commands::Config {
        all,
        project_name,
        project_version,
    } = command
    {
        let lines = config_values(ConfigQuery {
            all,
            project_name,
            project_version,
        })?;
        for line in lines {
            println!("{line}");
        }
        return Ok(());
    }

    let catalog = load_catalog(cli.catalog.as_ref())?;
    log::info!("Loaded {} catalog words", catalog.len());
    let config = SolverConfig::new(cli.opening);

    match command {
        Commands::Simple { played } => {
            let played = played
                .iter()
                .map(|text| parse_played(text))
                .collect::<Result<Vec<_>>>()?;
            let outcome = run_simple(&catalog, &config, played)?;
            notify(&outcome, cli.json)
        }
        Commands::Solve { word, played } => {
            let result = solve_word(&catalog, &config, SolveConfig::new(word).with_played(played))?;
            if !cli.json {
                print_solve_result(&result);
            }
            notify(&result.outcome, cli.json)
        }
        Commands::Benchmark { count, seed } => {
            let targets = pick_targets(&catalog, count, seed);
            println!(
                "\nBenchmarking {} words with opening {}...",
                targets.len(),
                config.opening_word.to_uppercase()
            );
            let result = run_benchmark(&catalog, &config, &targets, true);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Config { .. } => Ok(()),
    }
}
