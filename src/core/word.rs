//! Game word representation
//!
//! A Word stores a 5-letter word along with letter position indices.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word and grid row
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word, normalized to uppercase ASCII
///
/// Stores the word as bytes and maintains a map of letter positions for duplicate handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
    letter_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use termo::core::Word;
    ///
    /// let word = Word::new("carro").unwrap();
    /// assert_eq!(word.text(), "CARRO");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("c4rro").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_uppercase();

        if text.chars().count() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.chars().count()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(text.as_bytes());

        Ok(Self::from_letters(letters))
    }

    /// Build a word from letters already known to be uppercase ASCII
    pub(crate) fn from_letters(letters: [u8; WORD_LENGTH]) -> Self {
        debug_assert!(letters.iter().all(u8::is_ascii_uppercase));

        let mut letter_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in letters.iter().enumerate() {
            letter_positions.entry(letter).or_default().push(i);
        }

        Self {
            text: letters.iter().map(|&b| char::from(b)).collect(),
            letters,
            letter_positions,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Number of times a letter occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.positions_of(letter).len()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CARRO").unwrap();
        assert_eq!(word.text(), "CARRO");
        assert_eq!(word.letters(), b"CARRO");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("carro").unwrap();
        assert_eq!(word.text(), "CARRO");

        let word2 = Word::new(" CaRrO ").unwrap();
        assert_eq!(word2.text(), "CARRO");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("triste"),
            Err(WordError::InvalidLength(6))
        ));
        assert!(matches!(Word::new("mar"), Err(WordError::InvalidLength(3))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("carr0"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(
            Word::new("ca ro"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(Word::new("avião"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("livro").unwrap();
        assert_eq!(word.letter_at(0), b'L');
        assert_eq!(word.letter_at(2), b'V');
        assert_eq!(word.letter_at(4), b'O');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("naves").unwrap();
        assert!(word.has_letter(b'N'));
        assert!(word.has_letter(b'S'));
        assert!(!word.has_letter(b'Z'));
        assert!(!word.has_letter(b'n'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("llama").unwrap();
        assert_eq!(word.positions_of(b'L'), &[0, 1]);
        assert_eq!(word.positions_of(b'A'), &[2, 4]);
        assert_eq!(word.positions_of(b'M'), &[3]);
        assert_eq!(word.positions_of(b'Z'), &[]);
        assert_eq!(word.count_of(b'A'), 2);
        assert_eq!(word.count_of(b'Q'), 0);
    }

    #[test]
    fn word_parse_and_display() {
        let word: Word = "pedra".parse().unwrap();
        assert_eq!(format!("{word}"), "PEDRA");
        assert!("pedras".parse::<Word>().is_err());
    }

    #[test]
    fn word_error_messages() {
        assert_eq!(
            WordError::InvalidLength(6).to_string(),
            "word must be exactly 5 letters, got 6"
        );
    }
}
