//! Core domain types for the puzzle
//!
//! Words, tiles, guesses and the puzzle state. Everything here is plain
//! data with no I/O.

pub mod feedback;
mod guess;
mod state;
mod tile;
mod word;

pub use guess::Guess;
pub use state::{MAX_GUESSES, PuzzleState};
pub use tile::{RawTile, Tile, TileState};
pub use word::{WORD_LEN, Word};
