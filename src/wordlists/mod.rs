//! Word lists for the game
//!
//! The default lists are compiled into the binary by `build.rs`; [`WordLists`] can also be
//! loaded from files to swap either one out.

pub mod loader;

use crate::game::{GameError, GameSession, SessionConfig};
use std::path::Path;

include!(concat!(env!("OUT_DIR"), "/wordlists.rs"));

/// The two word sources a session is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    /// Words that may be chosen as the target
    pub answers: Vec<String>,
    /// Extra words accepted as guesses
    pub allowed: Vec<String>,
}

impl WordLists {
    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            answers: ANSWERS.iter().map(|&w| w.to_string()).collect(),
            allowed: ALLOWED.iter().map(|&w| w.to_string()).collect(),
        }
    }

    /// Embedded lists, with either one replaced by a file when a path is given
    ///
    /// # Errors
    ///
    /// Returns [`GameError::WordList`] if a given file cannot be read.
    pub fn load(answers: Option<&Path>, allowed: Option<&Path>) -> Result<Self, GameError> {
        let mut lists = Self::embedded();
        if let Some(path) = answers {
            lists.answers = loader::read_word_list(path)?;
        }
        if let Some(path) = allowed {
            lists.allowed = loader::read_word_list(path)?;
        }
        Ok(lists)
    }

    /// Start a new game over these lists
    ///
    /// # Errors
    ///
    /// See [`GameSession::new`].
    pub fn session(&self, config: SessionConfig) -> Result<GameSession, GameError> {
        GameSession::new(&self.answers, &self.allowed, config)
    }
}
