//! Scripted play
//!
//! Feeds a list of guesses to one session and records the result of every call.

use crate::core::Feedback;
use crate::game::{GameSession, Status};

/// One `submit_guess` call and what it returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub guess: String,
    pub status: Status,
    pub feedback: Feedback,
}

/// Submit every guess in order
///
/// Guesses after the game ends are still submitted so the caller sees the rejection.
pub fn run_machine<S: AsRef<str>>(session: &mut GameSession, guesses: &[S]) -> Vec<TurnRecord> {
    guesses
        .iter()
        .map(|guess| {
            let guess = guess.as_ref();
            let (status, feedback) = session.submit_guess(guess);
            TurnRecord {
                guess: guess.to_string(),
                status,
                feedback,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionConfig;

    #[test]
    fn records_every_call() {
        let mut session = GameSession::new(
            ["crank", "boxer"],
            ["books"],
            SessionConfig::with_target("crank"),
        )
        .unwrap();

        let records = run_machine(&mut session, &["boxer", "boxer", "xxxxx", "crank", "books"]);
        let statuses: Vec<Status> = records.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            [
                Status::InProgress,
                Status::DuplicateGuess,
                Status::InvalidInput,
                Status::Won,
                Status::AttemptsExhausted
            ]
        );
        assert_eq!(records[0].feedback, Feedback::from_positions(&[], &[4]));
        assert_eq!(records[2].guess, "xxxxx");
        assert_eq!(session.attempts_used(), 2);
    }

    #[test]
    fn no_guesses_no_records() {
        let mut session =
            GameSession::new(["crank"], ["books"], SessionConfig::with_target("crank")).unwrap();
        let none: &[&str] = &[];
        assert!(run_machine(&mut session, none).is_empty());
    }
}
