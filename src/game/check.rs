//! Guess validation

use std::fmt;

/// Outcome of the three guess checks, all of which are always evaluated
///
/// Mirrors a bit set: length = 1, alphabet = 2, vocabulary = 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuessCheck {
    pub bad_length: bool,
    pub not_alphabetic: bool,
    pub unknown_word: bool,
}

impl GuessCheck {
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !(self.bad_length || self.not_alphabetic || self.unknown_word)
    }

    /// Combined failure code, 0 when valid
    #[must_use]
    pub const fn code(self) -> u8 {
        (self.bad_length as u8) | ((self.not_alphabetic as u8) << 1) | ((self.unknown_word as u8) << 2)
    }

    /// One human-readable reason per failed check
    #[must_use]
    pub fn reasons(self) -> Vec<&'static str> {
        let mut reasons = Vec::new();
        if self.unknown_word {
            reasons.push("not in the word list");
        }
        if self.not_alphabetic {
            reasons.push("uses characters other than letters");
        }
        if self.bad_length {
            reasons.push("wrong length");
        }
        reasons
    }
}

impl fmt::Display for GuessCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            f.write_str("valid")
        } else {
            f.write_str(&self.reasons().join(", "))
        }
    }
}
