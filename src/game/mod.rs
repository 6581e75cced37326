//! Turn-by-turn game engine
//!
//! [`GameSession`] owns the target word, the vocabulary and the guess history, and
//! exposes one call per turn: [`GameSession::submit_guess`].

mod check;
mod error;
mod session;
mod status;

pub use check::GuessCheck;
pub use error::GameError;
pub use session::{GameSession, MAX_ATTEMPTS, SessionConfig};
pub use status::Status;
