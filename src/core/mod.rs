//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no terminal or I/O concerns.
//! All types here are pure, testable, and have clear invariants.

mod evaluation;
mod status;
mod word;

pub use evaluation::{Evaluation, evaluate};
pub use status::LetterStatus;
pub use word::{WORD_LENGTH, Word, WordError};
