//! Word of the day lookup

use crate::core::Word;
use crate::wordlists::WordSource;
use chrono::{Local, NaiveDate};

/// Date and word of the day for `date`, or for today when `None`
#[must_use]
pub fn daily_word(words: &WordSource, date: Option<NaiveDate>) -> (NaiveDate, Word) {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    (date, words.daily(date).clone())
}
