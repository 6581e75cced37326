//! Per-guess feedback calculation and representation
//!
//! Feedback records two disjoint sets of guess positions (0-4):
//! - exact: the letter equals the target letter at that position
//! - partial: the letter occurs somewhere else in the target
//!
//! Each set is stored as a 5-bit mask.
//!
//! Letter membership is tested against the whole target word, not against the letters
//! left over after exact matches. A letter that occurs once in the target but twice in
//! the guess is therefore reported at both positions.

use super::Word;
use super::word::WORD_LEN;
use std::fmt;

/// Feedback for a single scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

impl Feedback {
    /// No positions flagged; returned alongside every status except `InProgress`
    pub const EMPTY: Self = Self {
        exact: 0,
        partial: 0,
    };

    /// Score `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let guess = Word::new("click").unwrap();
    /// let target = Word::new("crank").unwrap();
    /// let feedback = Feedback::score(&guess, &target);
    ///
    /// assert_eq!(feedback.exact_positions().collect::<Vec<_>>(), [0, 4]);
    /// assert_eq!(feedback.partial_positions().collect::<Vec<_>>(), [3]);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut feedback = Self::EMPTY;

        for (i, &letter) in guess.chars().iter().enumerate() {
            if !target.has_letter(letter) {
                continue;
            }
            if letter == target.char_at(i) {
                feedback.exact |= 1 << i;
            } else {
                feedback.partial |= 1 << i;
            }
        }

        feedback
    }

    /// Build feedback from explicit position lists
    ///
    /// A position listed as exact is never also reported as partial.
    ///
    /// # Panics
    /// Panics if any position is >= 5
    #[must_use]
    pub fn from_positions(exact: &[usize], partial: &[usize]) -> Self {
        let exact = to_mask(exact);
        Self {
            exact,
            partial: to_mask(partial) & !exact,
        }
    }

    /// Positions whose letter matches the target exactly, ascending
    pub fn exact_positions(self) -> impl Iterator<Item = usize> {
        positions(self.exact)
    }

    /// Positions whose letter is in the target but elsewhere, ascending
    pub fn partial_positions(self) -> impl Iterator<Item = usize> {
        positions(self.partial)
    }

    #[inline]
    #[must_use]
    pub const fn is_exact(self, position: usize) -> bool {
        position < WORD_LEN && self.exact & (1 << position) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_partial(self, position: usize) -> bool {
        position < WORD_LEN && self.partial & (1 << position) != 0
    }

    /// True when no position is flagged
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.exact == 0 && self.partial == 0
    }

    /// Render as a row of squares, e.g. "🟩⬜⬜🟨🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        (0..WORD_LEN)
            .map(|i| {
                if self.is_exact(i) {
                    '🟩'
                } else if self.is_partial(i) {
                    '🟨'
                } else {
                    '⬜'
                }
            })
            .collect()
    }
}

fn to_mask(positions: &[usize]) -> u8 {
    positions.iter().fold(0, |mask, &i| {
        assert!(i < WORD_LEN, "position {i} out of range");
        mask | (1 << i)
    })
}

fn positions(mask: u8) -> impl Iterator<Item = usize> {
    (0..WORD_LEN).filter(move |&i| mask & (1 << i) != 0)
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "exact={{{}}} partial={{{}}}",
            join(self.exact_positions()),
            join(self.partial_positions())
        )
    }
}

fn join(positions: impl Iterator<Item = usize>) -> String {
    positions.map(|i| i.to_string()).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, target: &str) -> Feedback {
        Feedback::score(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn empty_feedback() {
        assert!(Feedback::EMPTY.is_empty());
        assert_eq!(Feedback::default(), Feedback::EMPTY);
        assert_eq!(Feedback::EMPTY.exact_positions().count(), 0);
        assert_eq!(Feedback::EMPTY.partial_positions().count(), 0);
    }

    #[test]
    fn no_shared_letters() {
        assert_eq!(score("doubt", "crank"), Feedback::EMPTY);
    }

    #[test]
    fn identical_words_all_exact() {
        let feedback = score("crank", "crank");
        assert_eq!(feedback.exact_positions().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
        assert_eq!(feedback.partial_positions().count(), 0);
    }

    #[test]
    fn crank_reference_rows() {
        assert_eq!(score("boxer", "crank"), Feedback::from_positions(&[], &[4]));
        assert_eq!(score("death", "crank"), Feedback::from_positions(&[2], &[]));
        assert_eq!(
            score("click", "crank"),
            Feedback::from_positions(&[0, 4], &[3])
        );
        assert_eq!(score("glass", "crank"), Feedback::from_positions(&[2], &[]));
        assert_eq!(score("cases", "crank"), Feedback::from_positions(&[0], &[1]));
    }

    #[test]
    fn repeated_guess_letter_flags_every_occurrence() {
        // One 'c' in the target; both guess positions holding 'c' are flagged
        let feedback = score("click", "crank");
        assert!(feedback.is_exact(0));
        assert!(feedback.is_partial(3));

        // Three 'e's in the guess and one in the target: every 'e' is flagged
        let feedback = score("geese", "crane");
        assert_eq!(feedback, Feedback::from_positions(&[4], &[1, 2]));
    }

    #[test]
    fn exact_and_partial_are_disjoint() {
        let feedback = Feedback::from_positions(&[0, 1], &[1, 2]);
        assert!(feedback.is_exact(1));
        assert!(!feedback.is_partial(1));
        assert_eq!(feedback.partial_positions().collect::<Vec<_>>(), [2]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn from_positions_rejects_out_of_range() {
        let _ = Feedback::from_positions(&[5], &[]);
    }

    #[test]
    fn out_of_range_queries_are_false() {
        let feedback = Feedback::from_positions(&[0, 1, 2, 3, 4], &[]);
        assert!(!feedback.is_exact(5));
        assert!(!feedback.is_partial(7));
    }

    #[test]
    fn emoji_row() {
        assert_eq!(score("click", "crank").to_emoji(), "🟩⬜⬜🟨🟩");
        assert_eq!(Feedback::EMPTY.to_emoji(), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn display_lists_positions() {
        assert_eq!(
            score("click", "crank").to_string(),
            "exact={0,4} partial={3}"
        );
        assert_eq!(Feedback::EMPTY.to_string(), "exact={} partial={}");
    }
}
