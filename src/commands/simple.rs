//! Simple interactive CLI mode
//!
//! Text-based game without TUI. Reads guesses line by line and prints each
//! graded guess as coloured tiles.

use crate::core::WORD_LENGTH;
use crate::game::{GameError, MAX_ATTEMPTS, Session, WordProvider};
use crate::output::formatters::{GUESS_PROMPT, round_over_message};
use crate::output::{format_guess_row, write_statistics};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

enum Command<'a> {
    Quit,
    NewRound,
    Statistics,
    Guess(&'a str),
}

/// Anything of guess length is a guess, so no command can hide a word
fn parse_command(input: &str) -> Command<'_> {
    if input.chars().count() == WORD_LENGTH {
        return Command::Guess(input);
    }

    match input.to_lowercase().as_str() {
        "quit" | "exit" | ":q" => Command::Quit,
        "new" | ":n" => Command::NewRound,
        "statistics" | ":s" => Command::Statistics,
        _ => Command::Guess(input),
    }
}

/// Run the simple interactive CLI mode
///
/// Plays rounds until the player quits or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a new
/// round cannot be started.
pub fn run_simple<P, R, W>(session: &mut Session<P>, mut reader: R, mut writer: W) -> Result<()>
where
    P: WordProvider,
    R: BufRead,
    W: Write,
{
    writeln!(writer, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(writer, "║                     Wordle - Simple Mode                     ║")?;
    writeln!(writer, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        writer,
        "Guess the 5-letter word in {MAX_ATTEMPTS} attempts. 🟩 right spot, 🟨 wrong spot, ⬜ not in word."
    )?;
    writeln!(
        writer,
        "Commands: ':s' for statistics, ':n' for a new word, ':q' to exit\n"
    )?;

    loop {
        let round = session.round();
        writeln!(
            writer,
            "{} {}",
            format!("[{}/{MAX_ATTEMPTS}]", round.attempts_used() + 1).bright_black(),
            GUESS_PROMPT
        )?;
        write!(writer, "> ")?;
        writer.flush()?;

        let Some(line) = read_line(&mut reader)? else {
            writeln!(writer, "\n👋 Thanks for playing!")?;
            return Ok(());
        };

        match parse_command(&line) {
            Command::Quit => {
                writeln!(writer, "\n👋 Thanks for playing!")?;
                return Ok(());
            }
            Command::NewRound => {
                session.new_round()?;
                writeln!(writer, "\n🔄 New word chosen!\n")?;
                continue;
            }
            Command::Statistics => {
                write_statistics(&mut writer, session.statistics())?;
                writeln!(writer)?;
                continue;
            }
            Command::Guess(guess) => match session.submit(guess) {
                Ok(_) => {}
                Err(GameError::Rejected(reason)) => {
                    writeln!(writer, "{}", format!("❌ {reason}").red())?;
                    continue;
                }
                Err(e) => {
                    writeln!(writer, "{}", format!("⚠ Could not save statistics: {e}").red())?;
                }
            },
        }

        let round = session.round();
        if let Some(last) = round.guesses().last() {
            writeln!(writer, "  {}", format_guess_row(&last.word, &last.feedback))?;
        }

        let Some(message) = round_over_message(round.outcome(), round.secret()) else {
            continue;
        };
        writeln!(writer, "\n{}", message.bright_green().bold())?;
        for (i, guess) in round.guesses().iter().enumerate() {
            writeln!(
                writer,
                "    {}. {} {}",
                (i + 1).to_string().bright_black(),
                guess.word.text().bright_white().bold(),
                guess.feedback.to_emoji()
            )?;
        }

        write!(writer, "\nPlay again? (yes/no): ")?;
        writer.flush()?;
        match read_line(&mut reader)?.as_deref().map(str::to_lowercase).as_deref() {
            Some("yes" | "y") => {
                session.new_round()?;
                writeln!(writer, "\n🔄 New word chosen!\n")?;
            }
            _ => {
                writeln!(writer, "\n👋 Thanks for playing!")?;
                return Ok(());
            }
        }
    }
}

/// Read one trimmed line, `None` at end of input
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
