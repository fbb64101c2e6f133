//! Display functions for command results

use super::formatters::{bar, distribution_bar_width};
use crate::core::{Evaluation, LetterStatus, Word};
use crate::game::{KeyboardState, Stats};
use chrono::NaiveDate;
use colored::{ColoredString, Colorize};

const BAR_WIDTH: usize = 30;

/// One letter tile colored by its status
fn tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        LetterStatus::Correct => text.black().on_truecolor(0x3a, 0xa3, 0x94).bold(),
        LetterStatus::Present => text.black().on_truecolor(0xd3, 0xad, 0x69).bold(),
        LetterStatus::Absent => text.white().on_truecolor(0x31, 0x2a, 0x2b).bold(),
        LetterStatus::Empty => text.white().on_truecolor(0x4a, 0x40, 0x41),
    }
}

/// Evaluated guess as a row of colored tiles
#[must_use]
pub fn format_row(guess: &Word, evaluation: &Evaluation) -> String {
    guess
        .text()
        .chars()
        .zip(evaluation.statuses())
        .map(|(letter, &status)| tile(letter, status).to_string())
        .collect()
}

/// Print an evaluated guess
pub fn print_row(turn: usize, guess: &Word, evaluation: &Evaluation) {
    println!(
        "  {} {}  {}",
        format!("{turn}.").bright_black(),
        format_row(guess, evaluation),
        evaluation.to_emoji()
    );
}

/// Print the letters tried so far, colored by their best status
pub fn print_keyboard(keyboard: &KeyboardState) {
    for row in ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"] {
        let keys: String = row
            .chars()
            .map(|c| match keyboard.status(c) {
                LetterStatus::Correct => c.to_string().green().bold().to_string(),
                LetterStatus::Present => c.to_string().yellow().bold().to_string(),
                LetterStatus::Absent => c.to_string().bright_black().to_string(),
                LetterStatus::Empty => c.to_string().white().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("    {keys}");
    }
}

/// Print the result of `termo check`
pub fn print_check_result(guess: &Word, target: &Word, evaluation: &Evaluation) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().bright_white().bold(),
        target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}  {}\n", format_row(guess, evaluation), evaluation.to_emoji());
    for (position, (letter, status)) in guess.text().chars().zip(evaluation.statuses()).enumerate()
    {
        println!("  {}  {letter}  {}", position + 1, status.label());
    }

    if evaluation.is_win() {
        println!("\n{}", "✅ Exact match".green().bold());
    }
}

/// Print the word of a given day
pub fn print_daily(date: NaiveDate, word: &Word) {
    println!(
        "{} {}",
        format!("{}:", date.format("%Y-%m-%d")).bright_black(),
        word.text().bright_yellow().bold()
    );
}

/// Print the statistics block
pub fn print_stats(stats: &Stats) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "PROGRESS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("   Games played:     {}", stats.games_played);
    println!(
        "   Win rate:         {}",
        format!("{}%", stats.win_percentage).bright_yellow().bold()
    );
    println!("   Current streak:   {}", stats.current_streak);
    println!("   Best streak:      {}", stats.max_streak);

    println!("\n📊 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.max_bucket();
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let filled = distribution_bar_width(count, max, BAR_WIDTH);
        println!("   {}  {} {count}", i + 1, bar(filled, BAR_WIDTH).green());
    }
    println!("   💀 {}", stats.losses);
}
