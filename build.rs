//! Build script embedding the target word list
//!
//! `data/words.txt` holds one word per line; blank lines and `#` comments are
//! skipped. Every entry must be five ASCII letters.

use std::fmt::Write as _;
use std::path::Path;
use std::{env, fs};

const WORD_LIST: &str = "data/words.txt";

fn main() {
    println!("cargo:rerun-if-changed={WORD_LIST}");

    let content = fs::read_to_string(WORD_LIST)
        .unwrap_or_else(|e| panic!("cannot read {WORD_LIST}: {e}"));
    let words = parse_words(&content);

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let target = Path::new(&out_dir).join("words.rs");
    fs::write(&target, render(&words))
        .unwrap_or_else(|e| panic!("cannot write {}: {e}", target.display()));
}

fn parse_words(content: &str) -> Vec<String> {
    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let word = line.to_ascii_uppercase();
            assert!(
                word.len() == 5 && word.bytes().all(|b| b.is_ascii_uppercase()),
                "{WORD_LIST}: '{line}' is not a 5-letter ASCII word"
            );
            word
        })
        .collect();

    assert!(!words.is_empty(), "{WORD_LIST} has no words");
    words
}

fn render(words: &[String]) -> String {
    let mut source = String::from("// Generated from data/words.txt by build.rs\n\n");
    let _ = writeln!(source, "/// Built-in target words ({} words)", words.len());
    source.push_str("pub const WORDS: &[&str] = &[\n");
    for word in words {
        let _ = writeln!(source, "    {word:?},");
    }
    source.push_str("];\n\n/// Number of built-in target words\n");
    let _ = writeln!(source, "pub const WORDS_COUNT: usize = {};", words.len());
    source
}
