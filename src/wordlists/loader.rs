//! Word list loading utilities

use crate::game::GameError;
use std::fs;
use std::path::Path;

/// Read a word list file, one word per line
///
/// Lines are trimmed and blank lines dropped. Words are not validated here; the session
/// skips malformed entries when it is built.
///
/// # Errors
///
/// Returns [`GameError::WordList`] if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::read_word_list;
///
/// let words = read_word_list("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, GameError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GameError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_word_list(&content))
}

/// Split file contents into trimmed, non-empty lines
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines() {
        let words = parse_word_list("crank\n\n  boxer  \r\n\t\ndeath");
        assert_eq!(words, ["crank", "boxer", "death"]);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list("\n\n").is_empty());
    }

    #[test]
    fn read_embedded_data_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/answers.txt");
        let words = read_word_list(path).unwrap();
        assert_eq!(words.len(), crate::wordlists::ANSWERS_COUNT);
    }

    #[test]
    fn read_missing_file() {
        let err = read_word_list("/nonexistent/words.txt").unwrap_err();
        assert!(matches!(err, GameError::WordList { .. }));
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }
}
