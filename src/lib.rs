//! Termo
//!
//! A five-letter word guessing game for the terminal, with a ratatui TUI and
//! a line-based mode.
//!
//! # Quick Start
//!
//! ```rust
//! use termo::core::{LetterStatus, Word, evaluate};
//!
//! let guess = Word::new("naves").unwrap();
//! let target = Word::new("carro").unwrap();
//!
//! let evaluation = evaluate(&guess, &target);
//! assert_eq!(evaluation.status_at(1), LetterStatus::Correct);
//! println!("{}", evaluation.to_emoji());
//! ```

// Core domain types
pub mod core;

// Grid, keyboard, turn controller and statistics
pub mod game;

// Word lists and target selection
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Settings file and log setup
pub mod config;
pub mod logging;
