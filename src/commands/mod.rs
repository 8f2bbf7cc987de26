//! Command implementations

pub mod benchmark;
pub mod config;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, pick_targets, run_benchmark};
pub use config::{ConfigQuery, config_values};
pub use simple::{ConsoleBoard, parse_played, run_simple, run_simple_with};
pub use solve::{SolveConfig, SolveResult, solve_word};
