//! Display functions for game results

use super::formatters::{attempts_bar, format_guess};
use crate::core::Feedback;
use crate::game::{GameSession, MAX_ATTEMPTS, Status};
use colored::Colorize;
use std::io::{self, Write};

/// Print every accepted guess, scored against the target
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_board<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    for (i, word) in session.history().iter().enumerate() {
        let feedback = Feedback::score(word, session.target());
        writeln!(
            out,
            "  {}. {}   {}",
            i + 1,
            format_guess(word, feedback),
            feedback.to_emoji()
        )?;
    }
    writeln!(
        out,
        "  [{}] {} left\n",
        attempts_bar(session.attempts_used(), MAX_ATTEMPTS),
        session.attempts_remaining()
    )
}

/// Print the end-of-game summary
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_outcome<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let guesses: Vec<&str> = session.history().iter().map(|w| w.text()).collect();

    if session.has_won() {
        let count = guesses.len();
        writeln!(
            out,
            "{}",
            format!(
                "You won in {count} {}!",
                if count == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        )?;
    } else {
        writeln!(out, "{}", "You lost :(".red().bold())?;
        writeln!(
            out,
            "The word was: {}",
            session.target().text().to_uppercase().bright_yellow().bold()
        )?;
    }
    writeln!(out, "Your guesses: {}", guesses.join(", "))
}

/// One machine-readable line: `<guess>\t<status>\t<code>\t<feedback>`
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_turn_line<W: Write>(
    out: &mut W,
    guess: &str,
    status: Status,
    feedback: Feedback,
) -> io::Result<()> {
    writeln!(out, "{guess}\t{status}\t{}\t{feedback}", status.code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionConfig;

    fn session() -> GameSession {
        GameSession::new(
            ["crank", "boxer", "death"],
            ["bolts"],
            SessionConfig::with_target("crank"),
        )
        .unwrap()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn board_lists_rows_in_order() {
        let mut session = session();
        session.submit_guess("boxer");
        session.submit_guess("death");

        let text = render(|out| write_board(out, &session));
        let boxer = text.find("b o x e r").unwrap();
        let death = text.find("d e A t h").unwrap();
        assert!(boxer < death);
        assert!(text.contains("⬜⬜⬜⬜🟨"));
        assert!(text.contains("4 left"));
    }

    #[test]
    fn outcome_for_win() {
        let mut session = session();
        session.submit_guess("crank");

        let text = render(|out| write_outcome(out, &session));
        assert!(text.contains("You won in 1 guess!"));
        assert!(text.contains("Your guesses: crank"));
    }

    #[test]
    fn outcome_for_loss_reveals_target() {
        let mut session = session();
        session.submit_guess("boxer");

        let text = render(|out| write_outcome(out, &session));
        assert!(text.contains("You lost"));
        assert!(text.contains("The word was: CRANK"));
    }

    #[test]
    fn turn_line_format() {
        let text = render(|out| {
            write_turn_line(
                out,
                "click",
                Status::InProgress,
                Feedback::from_positions(&[0, 4], &[3]),
            )
        });
        assert_eq!(text, "click\tin-progress\t0\texact={0,4} partial={3}\n");
    }
}
