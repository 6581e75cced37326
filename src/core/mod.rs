//! Core domain types for Wordle
//!
//! Validated words and the per-guess feedback algorithm. No I/O and no game state.

mod feedback;
mod word;

pub use feedback::Feedback;
pub use word::{WORD_LEN, Word, WordError};
