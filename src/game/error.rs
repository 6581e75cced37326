//! Session construction errors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while creating a [`GameSession`](super::GameSession)
///
/// Turn-level rejections are never errors; they are reported through
/// [`Status`](super::Status).
#[derive(Debug, Error)]
pub enum GameError {
    /// A word source is empty or the target override is malformed
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A word list file could not be read
    #[error("configuration error: cannot read word list {}: {source}", .path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GameError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
