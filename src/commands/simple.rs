//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line on stdin.

use crate::core::Word;
use crate::game::{GameOutcome, GameSession, SessionStats, StatsStore};
use crate::output::{print_keyboard, print_row, print_stats, share_text};
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::info;

/// How one game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Finished(GameOutcome),
    NewWord,
    Quit,
}

/// Run the line-based game on stdin/stdout
///
/// The first game uses the word of the day when `daily` is set; later games
/// always draw a random word.
///
/// # Errors
///
/// Returns an error on I/O failure reading stdin or writing stdout.
pub fn run_simple(words: &WordSource, daily: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut rng = rand::rng();
    let mut stats = SessionStats::new();

    println!("\n╔════════════════════════════════════════╗");
    println!("║                 TERMO                  ║");
    println!("╚════════════════════════════════════════╝\n");
    println!("Guess the 5-letter word in 6 tries.");
    println!("Commands: 'new' for another word, 'quit' to exit\n");

    let mut target = if daily {
        words.today().clone()
    } else {
        words.random(&mut rng).clone()
    };

    loop {
        let mut session = GameSession::new(target);
        info!("simple game started");

        match play_game(&mut session, &mut input)? {
            GameEnd::Quit => break,
            GameEnd::NewWord => println!("\n🔄 New word!\n"),
            GameEnd::Finished(outcome) => {
                report(&session, outcome, &mut stats);
                match prompt(&mut input, "Play again? (yes/no)")?.as_deref() {
                    Some("yes" | "y") => println!(),
                    _ => break,
                }
            }
        }

        target = words.random(&mut rng).clone();
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Play one game reading guesses from `input`
///
/// Invalid lines are reported and skipped; end of input quits.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_game<R: BufRead>(session: &mut GameSession, input: &mut R) -> io::Result<GameEnd> {
    while !session.phase().is_over() {
        let turn = session.attempts() + 1;
        let Some(line) = prompt(input, &format!("Guess {turn}/6"))? else {
            return Ok(GameEnd::Quit);
        };

        match line.as_str() {
            "quit" | "q" | "exit" => return Ok(GameEnd::Quit),
            "new" | "n" => return Ok(GameEnd::NewWord),
            "" => continue,
            _ => {}
        }

        let guess = match Word::new(&line) {
            Ok(word) => word,
            Err(err) => {
                println!("{}", format!("❌ {err}").red());
                continue;
            }
        };

        for letter in guess.text().chars() {
            session.add_letter(letter);
        }
        if let Some((_, evaluation)) = session.submit_row().evaluated() {
            print_row(turn, &guess, &evaluation);
            if !session.phase().is_over() {
                print_keyboard(session.keyboard());
            }
        }
    }

    Ok(session
        .outcome()
        .map_or(GameEnd::Quit, GameEnd::Finished))
}

fn report(session: &GameSession, outcome: GameOutcome, stats: &mut dyn StatsStore) {
    println!();
    match outcome {
        GameOutcome::Won { attempts } => println!(
            "{}",
            format!("🎉 Solved in {attempts}/6!").green().bold()
        ),
        GameOutcome::Lost => println!(
            "{} {}",
            "💀 The word was".red().bold(),
            session.target().text().bright_yellow().bold()
        ),
    }

    if let Some(text) = share_text(session) {
        println!("\n{text}");
    }
    print_stats(&stats.record(outcome));
    println!();
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn prompt<R: BufRead>(input: &mut R, text: &str) -> io::Result<Option<String>> {
    print!("{text}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
