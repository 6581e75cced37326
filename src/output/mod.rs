//! Terminal output formatting
//!
//! Display utilities for the play and machine front-ends.

pub mod display;
pub mod formatters;

pub use display::{write_board, write_outcome, write_turn_line};
