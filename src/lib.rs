//! Wordle Game
//!
//! A turn-by-turn Wordle engine: a secret 5-letter target, six attempts, and per-guess
//! feedback of exact and partially matching positions.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{SessionConfig, Status};
//! use wordle_game::wordlists::WordLists;
//!
//! let mut session = WordLists::embedded()
//!     .session(SessionConfig::with_target("crank"))
//!     .unwrap();
//!
//! let (status, feedback) = session.submit_guess("click");
//! assert_eq!(status, Status::InProgress);
//! println!("{feedback}"); // exact={0,4} partial={3}
//! ```

// Core domain types
pub mod core;

// Game session engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Log backend
pub mod logging;
