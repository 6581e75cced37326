//! Command implementations

pub mod machine;
pub mod play;

pub use machine::{TurnRecord, run_machine};
pub use play::run_play;
