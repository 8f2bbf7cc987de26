//! Wordle Alarm
//!
//! Checks and solves the daily five-letter word puzzle by constraint
//! filtering: every round the feedback narrows a list of candidate answers
//! and the most common survivor becomes the next guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_alarm::catalog::Catalog;
//! use wordle_alarm::config::SolverConfig;
//! use wordle_alarm::core::Word;
//! use wordle_alarm::solver::{Session, SimulatedBoard};
//!
//! let catalog = Catalog::embedded().unwrap();
//! let board = SimulatedBoard::new(Word::new("crane").unwrap());
//! let mut session = Session::new(&catalog, SolverConfig::default(), board).unwrap();
//!
//! let outcome = session.run().unwrap();
//! assert_eq!(outcome.solution.as_deref(), Some("crane"));
//! ```

// Core domain types
pub mod core;

// Word catalog loading
pub mod catalog;

// Filtering, selection and the solver loop
pub mod solver;

// Session configuration
pub mod config;

// Error taxonomy
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
