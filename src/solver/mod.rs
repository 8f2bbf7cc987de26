//! Puzzle solving
//!
//! The constraint filter, the guess selector and the loop that drives them
//! against a board.

pub mod board;
mod candidates;
mod engine;
pub mod filter;
pub mod select;

pub use board::{Board, Notifier, SimulatedBoard};
pub use candidates::CandidateSet;
pub use engine::{Outcome, OutcomeKind, Phase, Round, Session};
pub use filter::{Constraints, filter, filter_all};
pub use select::select;
