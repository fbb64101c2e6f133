//! Best-known status per keyboard letter

use crate::core::{Evaluation, LetterStatus, Word};
use rustc_hash::FxHashMap;

/// Combine a recorded status with a new observation
///
/// A recorded status is only replaced when unset, when `Absent` is followed by
/// any hit, or when `Present` is followed by `Correct`. The result never
/// regresses and applying the same observation twice changes nothing.
#[must_use]
pub fn upgrade(existing: Option<LetterStatus>, observed: LetterStatus) -> LetterStatus {
    match existing {
        None => observed,
        Some(LetterStatus::Absent) if observed != LetterStatus::Absent => observed,
        Some(LetterStatus::Present) if observed == LetterStatus::Correct => observed,
        Some(current) => current,
    }
}

/// Aggregated letter statuses derived from submitted rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: FxHashMap<u8, LetterStatus>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status shown for a letter key (`Empty` when never guessed)
    #[must_use]
    pub fn status(&self, letter: char) -> LetterStatus {
        u8::try_from(letter.to_ascii_uppercase())
            .ok()
            .and_then(|b| self.keys.get(&b).copied())
            .unwrap_or_default()
    }

    /// Record one observation for a letter
    pub fn record(&mut self, letter: u8, observed: LetterStatus) {
        if !observed.is_resolved() {
            return;
        }
        let letter = letter.to_ascii_uppercase();
        let next = upgrade(self.keys.get(&letter).copied(), observed);
        self.keys.insert(letter, next);
    }

    /// Record every position of an evaluated guess
    pub fn record_evaluation(&mut self, guess: &Word, evaluation: &Evaluation) {
        for (&letter, &status) in guess.letters().iter().zip(evaluation.statuses()) {
            self.record(letter, status);
        }
    }

    /// Number of letters with a recorded status
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
