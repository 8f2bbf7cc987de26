//! Terminal output formatting
//!
//! Display utilities for CLI results, pretty-printing and outcome alerts.

pub mod display;
pub mod formatters;
pub mod notify;

pub use display::{print_benchmark_result, print_solve_result};
pub use notify::{ConsoleNotifier, JsonNotifier, summary};
