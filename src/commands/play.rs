//! Interactive play mode
//!
//! Text-based game loop over any line reader and writer.

use crate::game::{GameSession, SessionConfig, Status};
use crate::output::{write_board, write_outcome};
use crate::wordlists::WordLists;
use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::io::{BufRead, Write};

/// Play games until the player quits or input ends
///
/// The first game uses `config`; "yes" at the end starts a game with a fresh random target,
/// "same" replays the current target on an empty board.
///
/// # Errors
///
/// Returns an error if the session cannot be created or the terminal cannot be read or
/// written.
pub fn run_play<R: BufRead, W: Write>(
    lists: &WordLists,
    config: SessionConfig,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    print_rules(out)?;
    let mut session = lists.session(config).context("failed to start a game")?;

    loop {
        if session.is_over() {
            write_outcome(out, &session)?;
            let answer = prompt(input, out, "\nPlay again? (yes / same / no)")?;
            session = match answer.as_deref() {
                Some("yes" | "y") => lists
                    .session(SessionConfig::default())
                    .context("failed to start a game")?,
                Some("same" | "s") => session.rematch(),
                _ => break,
            };
            writeln!(out, "\n{}\n", "New game started!".bright_cyan())?;
            continue;
        }

        let label = format!("{} input", session.attempts_used() + 1);
        let Some(guess) = prompt(input, out, &label)? else {
            break;
        };
        if matches!(guess.as_str(), "quit" | "q" | "exit") {
            break;
        }

        let check = session.check_guess(&guess);
        let (status, _) = session.submit_guess(&guess);
        match status {
            Status::InvalidInput => {
                for reason in check.reasons() {
                    writeln!(out, "{} {reason}, try again!", "✗".red())?;
                }
                writeln!(out)?;
            }
            Status::DuplicateGuess => {
                writeln!(out, "{}\n", "You already guessed that word.".yellow())?;
            }
            Status::AttemptsExhausted => {}
            Status::InProgress | Status::Won | Status::Lost => {
                write_board(out, &session)?;
            }
        }
    }

    info!("play loop finished");
    writeln!(out, "\nThanks for playing!")?;
    Ok(())
}

fn print_rules<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "{}", "  W O R D L E".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "A word has been chosen. You have 6 attempts to guess it.")?;
    writeln!(out, "Each guess must be a valid 5-letter word.")?;
    writeln!(
        out,
        "  {}  letter is in the word at this position",
        "UPPERCASE".green().bold()
    )?;
    writeln!(
        out,
        "  {}       letter is in the word, elsewhere",
        "bold".yellow().bold()
    )?;
    writeln!(out, "Type 'quit' to leave.\n")?;
    Ok(())
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush().context("failed to flush output")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
