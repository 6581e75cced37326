//! Turn outcomes

use std::fmt;

/// Result of one [`submit_guess`](super::GameSession::submit_guess) call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Guess accepted, game continues; feedback is populated
    InProgress,
    /// Guess equals the target
    Won,
    /// Sixth guess accepted without a match
    Lost,
    /// Wrong length, non-alphabetic, or not in the vocabulary
    InvalidInput,
    /// Guess was already accepted earlier; does not use an attempt
    DuplicateGuess,
    /// No attempts left (or the game is already over)
    AttemptsExhausted,
}

impl Status {
    /// Integer code reported by machine mode
    ///
    /// Non-negative codes describe the game, negative codes a rejected turn.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Self::InProgress => 0,
            Self::Won => 1,
            Self::Lost => 2,
            Self::InvalidInput => -1,
            Self::AttemptsExhausted => -2,
            Self::DuplicateGuess => -3,
        }
    }

    /// The game ended on this turn
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// The turn was a no-op and the session is unchanged
    #[must_use]
    pub const fn is_rejection(self) -> bool {
        self.code() < 0
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::InvalidInput => "invalid-input",
            Self::DuplicateGuess => "duplicate-guess",
            Self::AttemptsExhausted => "attempts-exhausted",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Status; 6] = [
        Status::InProgress,
        Status::Won,
        Status::Lost,
        Status::InvalidInput,
        Status::DuplicateGuess,
        Status::AttemptsExhausted,
    ];

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<i8> = ALL.iter().map(|s| s.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ALL.len());
    }

    #[test]
    fn rejections_are_negative() {
        for status in ALL {
            assert_eq!(
                status.is_rejection(),
                matches!(
                    status,
                    Status::InvalidInput | Status::DuplicateGuess | Status::AttemptsExhausted
                ),
                "{status}"
            );
        }
    }

    #[test]
    fn only_won_and_lost_are_terminal() {
        let terminal: Vec<Status> = ALL.into_iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminal, [Status::Won, Status::Lost]);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Status::DuplicateGuess.to_string(), "duplicate-guess");
        assert_eq!(Status::InProgress.to_string(), "in-progress");
    }
}
