//! Word list parsing
//!
//! Custom lists from disk and the embedded constant, both as validated words.

use super::WordSourceError;
use crate::core::Word;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load words from a file
///
/// One word per line; blank lines, `#` comments and entries that are not
/// valid 5-letter words are skipped.
///
/// # Errors
///
/// Returns [`WordSourceError::Io`] if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use termo::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordSourceError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(&content);
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse newline-separated words, skipping comments and invalid entries
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Validated words from a string slice, invalid entries dropped
///
/// # Examples
/// ```
/// use termo::wordlists::loader::words_from_slice;
/// use termo::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["carro", "LIVRO", "naves"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CARRO");
        assert_eq!(words[1].text(), "LIVRO");
        assert_eq!(words[2].text(), "NAVES");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["carro", "triste", "mar", "pedra"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CARRO");
        assert_eq!(words[1].text(), "PEDRA");
    }

    #[test]
    fn words_from_lines_skips_comments_and_blanks() {
        let content = "# header\n\ncarro\n  livro  \nrapido\n";
        let words = words_from_lines(content);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CARRO");
        assert_eq!(words[1].text(), "LIVRO");
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("/nonexistent/termo/words.txt");
        assert!(matches!(result, Err(WordSourceError::Io { .. })));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("termo-loader-{}.txt", std::process::id()));
        fs::write(&path, "terra\nmundo\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "MUNDO");
    }
}
