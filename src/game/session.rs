//! Game session state and the per-turn rules engine

use super::{GameError, GuessCheck, Status};
use crate::core::{Feedback, WORD_LEN, Word};
use crate::wordlists::loader::read_word_list;
use log::{debug, trace, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Number of guesses a session accepts
pub const MAX_ATTEMPTS: usize = 6;

/// Options for creating a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Use this word as the target instead of a random answer
    pub target: Option<String>,
    /// Seed for the target pick; the thread RNG is used when absent
    pub seed: Option<u64>,
}

impl SessionConfig {
    #[must_use]
    pub fn with_target(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            target: None,
            seed: Some(seed),
        }
    }
}

/// A single game: one secret target, up to six accepted guesses
///
/// There is no internal locking. One caller drives a session at a time; hosts that share
/// it across threads must wrap it in their own mutex.
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    vocabulary: FxHashSet<Word>,
    history: Vec<Word>,
}

impl GameSession {
    /// Create a session from an answer list and an additional allowed-guess list
    ///
    /// The vocabulary is the union of both lists. Blank entries are ignored and malformed
    /// entries are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Configuration`] if either list has no usable words, or if the
    /// target override is not a 5-letter word from the vocabulary.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::{GameSession, SessionConfig, Status};
    ///
    /// let mut session = GameSession::new(
    ///     ["crank", "death"],
    ///     ["bolts"],
    ///     SessionConfig::with_target("crank"),
    /// )
    /// .unwrap();
    ///
    /// let (status, feedback) = session.submit_guess("death");
    /// assert_eq!(status, Status::InProgress);
    /// assert_eq!(feedback.exact_positions().collect::<Vec<_>>(), [2]);
    ///
    /// let (status, _) = session.submit_guess("crank");
    /// assert_eq!(status, Status::Won);
    /// ```
    pub fn new<A, B>(answers: A, allowed: B, config: SessionConfig) -> Result<Self, GameError>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        let answers = parse_words(answers, "answer")?;
        let allowed = parse_words(allowed, "allowed-guess")?;

        let mut vocabulary: FxHashSet<Word> = FxHashSet::default();
        vocabulary.extend(allowed);
        vocabulary.extend(answers.iter().cloned());

        let target = match config.target {
            Some(text) => resolve_override(&text, &vocabulary)?,
            None => pick_target(&answers, config.seed)?,
        };

        debug!(
            "new session: {} answers, {} vocabulary words, seed {:?}",
            answers.len(),
            vocabulary.len(),
            config.seed
        );

        Ok(Self {
            target,
            vocabulary,
            history: Vec::with_capacity(MAX_ATTEMPTS),
        })
    }

    /// Create a session from two word list files, one word per line
    ///
    /// # Errors
    ///
    /// Returns [`GameError::WordList`] if a file cannot be read, otherwise the same errors
    /// as [`GameSession::new`].
    pub fn from_files(
        answers_path: impl AsRef<Path>,
        allowed_path: impl AsRef<Path>,
        config: SessionConfig,
    ) -> Result<Self, GameError> {
        let answers = read_word_list(answers_path)?;
        let allowed = read_word_list(allowed_path)?;
        Self::new(answers, allowed, config)
    }

    /// A fresh session with the same target and vocabulary and an empty board
    #[must_use]
    pub fn rematch(&self) -> Self {
        Self {
            target: self.target.clone(),
            vocabulary: self.vocabulary.clone(),
            history: Vec::with_capacity(MAX_ATTEMPTS),
        }
    }

    /// Play one turn
    ///
    /// Checks run in a fixed order and the first that applies decides the result:
    /// 1. board full (or game already won): `AttemptsExhausted`
    /// 2. failed validation: `InvalidInput`
    /// 3. guess is the target: `Won`, guess recorded
    /// 4. guess already recorded: `DuplicateGuess`
    /// 5. sixth recorded guess: `Lost`
    /// 6. otherwise `InProgress` with the scored feedback
    ///
    /// Feedback is [`Feedback::EMPTY`] for everything except `InProgress`. Rejections leave
    /// the session untouched.
    pub fn submit_guess(&mut self, guess: &str) -> (Status, Feedback) {
        if self.is_over() {
            trace!("rejected {guess:?}: no attempts left");
            return (Status::AttemptsExhausted, Feedback::EMPTY);
        }

        let check = self.check_guess(guess);
        let word = match self.vocabulary.get(guess) {
            Some(word) if check.is_valid() => word.clone(),
            _ => {
                trace!("rejected {guess:?}: {check}");
                return (Status::InvalidInput, Feedback::EMPTY);
            }
        };

        if word == self.target {
            self.history.push(word);
            debug!("turn {}: {guess} wins", self.history.len());
            return (Status::Won, Feedback::EMPTY);
        }

        let feedback = Feedback::score(&word, &self.target);
        if self.history.contains(&word) {
            trace!("rejected {guess:?}: already guessed");
            return (Status::DuplicateGuess, Feedback::EMPTY);
        }
        self.history.push(word);
        debug!("turn {}: {guess} -> {feedback}", self.history.len());

        if self.history.len() == MAX_ATTEMPTS {
            return (Status::Lost, Feedback::EMPTY);
        }

        (Status::InProgress, feedback)
    }

    /// Run the validity checks on a guess without playing it
    #[must_use]
    pub fn check_guess(&self, guess: &str) -> GuessCheck {
        GuessCheck {
            bad_length: guess.chars().count() != WORD_LEN,
            not_alphabetic: guess.is_empty() || !guess.chars().all(char::is_alphabetic),
            unknown_word: !self.vocabulary.contains(guess),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Accepted guesses, oldest first
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.history.last() == Some(&self.target)
    }

    /// True once the target was guessed or every attempt is used
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.history.len() >= MAX_ATTEMPTS || self.has_won()
    }
}

fn parse_words<I>(words: I, kind: &str) -> Result<Vec<Word>, GameError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut parsed = Vec::new();
    for raw in words {
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            continue;
        }
        match Word::new(raw) {
            Ok(word) => parsed.push(word),
            Err(e) => warn!("skipping {kind} word {raw:?}: {e}"),
        }
    }

    if parsed.is_empty() {
        return Err(GameError::config(format!("{kind} word list is empty")));
    }
    Ok(parsed)
}

fn resolve_override(text: &str, vocabulary: &FxHashSet<Word>) -> Result<Word, GameError> {
    let target = Word::new(text)
        .map_err(|e| GameError::config(format!("invalid target override {text:?}: {e}")))?;

    if !vocabulary.contains(target.text()) {
        return Err(GameError::config(format!(
            "target override {text:?} is not in the vocabulary"
        )));
    }
    Ok(target)
}

fn pick_target(answers: &[Word], seed: Option<u64>) -> Result<Word, GameError> {
    let choice = match seed {
        Some(seed) => answers.choose(&mut StdRng::seed_from_u64(seed)),
        None => answers.choose(&mut rand::rng()),
    };
    choice
        .cloned()
        .ok_or_else(|| GameError::config("answer word list is empty"))
}
