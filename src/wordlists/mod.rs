//! Word lists and target word selection
//!
//! Provides the embedded word list compiled into the binary and the
//! [`WordSource`] that picks the target word for a game, either the word of
//! the day or a uniformly random one.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use chrono::{Local, NaiveDate};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Format of the calendar string hashed for the daily word (`Mon Oct 19 2026`)
pub const DAILY_DATE_FORMAT: &str = "%a %b %d %Y";

/// Errors building a word source
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("word list contains no valid 5-letter words")]
    Empty,
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fixed, non-empty list of candidate target words
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<Word>,
}

impl WordSource {
    /// Word source over the built-in list
    ///
    /// # Panics
    /// Never in practice: the build script rejects an empty list.
    #[must_use]
    pub fn embedded() -> Self {
        let words = loader::words_from_slice(WORDS);
        assert!(!words.is_empty(), "embedded word list is empty");
        Self { words }
    }

    /// Word source over an arbitrary list
    ///
    /// # Errors
    /// Returns [`WordSourceError::Empty`] if `words` is empty.
    pub fn from_words(words: Vec<Word>) -> Result<Self, WordSourceError> {
        if words.is_empty() {
            return Err(WordSourceError::Empty);
        }
        Ok(Self { words })
    }

    /// Word source loaded from a file, one word per line
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or holds no valid words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordSourceError> {
        Self::from_words(loader::load_from_file(path)?)
    }

    /// All candidate words
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of candidate words (always at least one)
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed source
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether a word is one of the candidates
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Word of the day for a calendar date
    ///
    /// The same date always yields the same word for a given list.
    #[must_use]
    pub fn daily(&self, date: NaiveDate) -> &Word {
        let key = date.format(DAILY_DATE_FORMAT).to_string();
        let index = date_hash(&key).unsigned_abs() as usize % self.words.len();
        &self.words[index]
    }

    /// Word of the day for the local calendar date
    #[must_use]
    pub fn today(&self) -> &Word {
        self.daily(Local::now().date_naive())
    }

    /// Uniformly random word
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // The list is never empty, so choose always succeeds
        self.words.choose(rng).unwrap_or(&self.words[0])
    }
}

impl Default for WordSource {
    fn default() -> Self {
        Self::embedded()
    }
}

/// 32-bit string hash used to seed the daily word
///
/// `h = h * 31 + c` over the string's characters with wrapping arithmetic.
#[must_use]
pub fn date_hash(key: &str) -> i32 {
    key.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
        assert!(WORDS_COUNT > 0);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
        assert_eq!(WordSource::embedded().len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_contains_scenario_words() {
        let source = WordSource::embedded();
        for word in ["CARRO", "NAVES", "LIVRO"] {
            assert!(source.contains(&Word::new(word).unwrap()), "{word} missing");
        }
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(
            WordSource::from_words(Vec::new()),
            Err(WordSourceError::Empty)
        ));
    }

    #[test]
    fn date_hash_matches_reference_values() {
        assert_eq!(date_hash(""), 0);
        assert_eq!(date_hash("a"), 97);
        assert_eq!(date_hash("ab"), 97 * 31 + 98);
        // Overflow wraps instead of panicking
        let long = "Wed Dec 31 2025".repeat(8);
        assert_eq!(date_hash(&long), date_hash(&long));
    }

    #[test]
    fn daily_word_is_deterministic() {
        let source = WordSource::embedded();
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        let first = source.daily(date).clone();
        let second = source.daily(date).clone();
        assert_eq!(first, second);
        assert!(source.contains(&first));
    }

    #[test]
    fn daily_word_uses_calendar_string() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 5).unwrap();
        assert_eq!(date.format(DAILY_DATE_FORMAT).to_string(), "Mon Oct 05 2026");

        let words = loader::words_from_slice(&["CARRO", "LIVRO", "NAVES"]);
        let source = WordSource::from_words(words).unwrap();
        let expected = date_hash("Mon Oct 05 2026").unsigned_abs() as usize % 3;
        assert_eq!(source.daily(date), &source.words()[expected]);
    }

    #[test]
    fn daily_word_varies_across_dates() {
        let source = WordSource::embedded();
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let distinct: std::collections::HashSet<_> = start
            .iter_days()
            .take(60)
            .map(|d| source.daily(d).text().to_string())
            .collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn random_word_comes_from_list() {
        let source = WordSource::embedded();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(source.contains(source.random(&mut rng)));
        }
    }

    #[test]
    fn single_word_list_always_yields_it() {
        let source = WordSource::from_words(loader::words_from_slice(&["TERRA"])).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(source.random(&mut rng).text(), "TERRA");
        assert_eq!(
            source
                .daily(NaiveDate::from_ymd_opt(2030, 2, 28).unwrap())
                .text(),
            "TERRA"
        );
    }
}
