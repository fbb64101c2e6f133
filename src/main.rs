//! Termo - CLI
//!
//! Five-letter word guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use termo::{
    commands::{check_guess, daily_word, run_simple},
    config::{Config, ConfigError},
    interactive::{App, run_tui},
    logging,
    output::{print_check_result, print_daily},
    wordlists::WordSource,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "termo",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start with a random word instead of the word of the day
    #[arg(long, global = true)]
    random: bool,

    /// Path to a word list file (one word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Path to a config file (default: ~/.termo/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based game on stdin/stdout
    Simple,

    /// Evaluate a guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The word being guessed
        target: String,
    },

    /// Print the word of the day
    Daily {
        /// Date to look up (YYYY-MM-DD), today by default
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
}

/// Settings from `--config` or the default location, CLI flags applied on top
///
/// An explicit `--config` file must load. A broken default file falls back to
/// the defaults and its error is handed back for reporting once logging runs.
fn load_config(cli: &Cli) -> Result<(Config, Option<ConfigError>)> {
    let (mut config, fallback) = match &cli.config {
        Some(path) => (Config::load_from(path)?, None),
        None => match Config::load() {
            Ok(config) => (config, None),
            Err(err) => (Config::default(), Some(err)),
        },
    };

    if cli.random {
        config.daily = false;
    }
    if let Some(path) = &cli.wordlist {
        config.word_list = Some(path.clone());
    }
    Ok((config, fallback))
}

/// Custom list when one is configured, else the built-in list
fn load_words(word_list: Option<&Path>) -> Result<WordSource> {
    match word_list {
        Some(path) => {
            let words = WordSource::from_file(path)
                .with_context(|| format!("loading word list {}", path.display()))?;
            info!(path = %path.display(), words = words.len(), "custom word list loaded");
            Ok(words)
        }
        None => Ok(WordSource::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, config_error) = load_config(&cli)?;

    if logging::init(&config.log_level).is_none() {
        eprintln!("warning: file logging unavailable");
    }
    if let Some(err) = config_error {
        warn!(error = %err, "using default configuration");
        eprintln!("warning: {:#}, using default configuration", anyhow::Error::from(err));
    }

    let words = load_words(config.word_list.as_deref())?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(words, config)),
        Commands::Simple => run_simple(&words, config.daily),
        Commands::Check { guess, target } => {
            let result = check_guess(&guess, &target).inspect_err(|err| {
                warn!(error = %err, "check rejected");
            })?;
            print_check_result(&result.guess, &result.target, &result.evaluation);
            Ok(())
        }
        Commands::Daily { date } => {
            let (date, word) = daily_word(&words, date);
            print_daily(date, &word);
            Ok(())
        }
    }
}
