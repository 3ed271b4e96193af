//! Display functions for command results

use super::formatters::{create_progress_bar, statistics_rows};
use crate::commands::CheckResult;
use crate::core::{Feedback, FeedbackClass, Word};
use crate::stats::StatisticsRecord;
use colored::{ColoredString, Colorize};
use std::io::{self, Write};
use std::path::Path;

const BAR_WIDTH: usize = 30;

fn colored_letter(letter: char, class: FeedbackClass) -> ColoredString {
    let tile = format!(" {letter} ");
    match class {
        FeedbackClass::Correct => tile.black().on_green().bold(),
        FeedbackClass::Present => tile.black().on_yellow().bold(),
        FeedbackClass::Absent => tile.white().on_bright_black().bold(),
    }
}

/// A guess as coloured tiles followed by its emoji row
#[must_use]
pub fn format_guess_row(word: &Word, feedback: &Feedback) -> String {
    let tiles: String = word
        .text()
        .chars()
        .zip(feedback.classes())
        .map(|(letter, &class)| colored_letter(letter, class).to_string())
        .collect();
    format!("{tiles}  {}", feedback.to_emoji())
}

/// Write the statistics table with distribution bars
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_statistics<W: Write>(writer: &mut W, stats: &StatisticsRecord) -> io::Result<()> {
    writeln!(writer, "\n{}", "═".repeat(60).cyan())?;
    writeln!(writer, " {} ", "STATISTICS".bright_cyan().bold())?;
    writeln!(writer, "{}", "═".repeat(60).cyan())?;

    let max = f64::from(stats.max_completions());
    for (i, (label, count)) in statistics_rows(stats).into_iter().enumerate() {
        if i == 0 {
            writeln!(writer, "\n   {label}: {}", count.to_string().bright_yellow().bold())?;
            writeln!(writer)?;
            continue;
        }
        let bar = create_progress_bar(f64::from(count), max, BAR_WIDTH);
        writeln!(writer, "   {label:<26} {} {count:4}", bar.green())?;
    }
    Ok(())
}

/// Print the statistics table to stdout
pub fn print_statistics(stats: &StatisticsRecord, source: Option<&Path>) {
    let mut stdout = io::stdout().lock();
    let written = write_statistics(&mut stdout, stats).and_then(|()| match source {
        Some(path) => writeln!(
            stdout,
            "\n   {}",
            format!("(from {})", path.display()).bright_black()
        ),
        None => Ok(()),
    });
    if let Err(e) = written {
        log::warn!("failed to print statistics: {e}");
    }
}

/// Print the result of checking a guess against a secret word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}",
        result.secret.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!(
        "\n  {}  {}",
        format_guess_row(&result.guess, &result.feedback),
        result.feedback
    );

    let correct = result.feedback.count(FeedbackClass::Correct);
    let present = result.feedback.count(FeedbackClass::Present);
    println!("\n  Correct: {}", correct.to_string().green().bold());
    println!("  Present: {}", present.to_string().yellow().bold());

    if result.feedback.is_solved() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}
