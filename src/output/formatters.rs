//! Formatting utilities for terminal output

use crate::core::{Feedback, Word};
use colored::Colorize;

/// Render a guess with its feedback
///
/// Exact letters are uppercased (green), partial letters bold (yellow), absent letters
/// are left as-is. Letters are separated by spaces.
#[must_use]
pub fn format_guess(word: &Word, feedback: Feedback) -> String {
    word.text()
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            if feedback.is_exact(i) {
                ch.to_ascii_uppercase().to_string().green().bold().to_string()
            } else if feedback.is_partial(i) {
                ch.to_string().yellow().bold().to_string()
            } else {
                ch.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Attempt meter: one filled cell per used attempt
#[must_use]
pub fn attempts_bar(used: usize, max: usize) -> String {
    let filled = used.min(max);
    format!("{}{}", "■".repeat(filled), "□".repeat(max - filled))
}
