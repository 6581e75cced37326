//! Wordle word representation
//!
//! A Word stores a validated 5-letter lowercase word along with a letter-membership mask
//! used by feedback scoring.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A 5-letter lowercase word
///
/// Equality and hashing only look at the text, so a `Word` can be looked up in a set by `&str`.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
    letters: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "word contains non-alphabetic characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalising it to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Crank").unwrap();
    /// assert_eq!(word.text(), "crank");
    ///
    /// assert!(Word::new("cranks").is_err());
    /// assert!(Word::new("cr4nk").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(WordError::InvalidLength(len));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let mut chars = [0u8; WORD_LEN];
        let mut letters = 0u32;
        for (slot, &ch) in chars.iter_mut().zip(text.as_bytes()) {
            if !ch.is_ascii_lowercase() {
                return Err(WordError::InvalidCharacters);
            }
            *slot = ch;
            letters |= letter_bit(ch);
        }

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a letter anywhere
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.letters & letter_bit(letter) != 0
    }
}

const fn letter_bit(letter: u8) -> u32 {
    1 << (letter.wrapping_sub(b'a') % 26)
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
