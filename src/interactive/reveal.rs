//! Row reveal animation
//!
//! The session resolves a row instantly; a [`Reveal`] only decides how much of
//! that result the screen shows at a given moment. One cell is disclosed per
//! `per_cell` interval.

use crate::core::{Evaluation, LetterStatus, WORD_LENGTH, Word};
use crate::game::KeyboardState;
use std::time::{Duration, Instant};

/// Position-by-position disclosure of a submitted row
#[derive(Debug, Clone)]
pub struct Reveal {
    row: usize,
    guess: Word,
    evaluation: Evaluation,
    keyboard_before: KeyboardState,
    started: Instant,
    per_cell: Duration,
}

impl Reveal {
    /// Start revealing `row`
    ///
    /// `keyboard_before` is the keyboard as it was before the submission, so
    /// keys only light up as their cells are disclosed.
    #[must_use]
    pub fn new(
        row: usize,
        guess: Word,
        evaluation: Evaluation,
        keyboard_before: KeyboardState,
        started: Instant,
        per_cell: Duration,
    ) -> Self {
        Self {
            row,
            guess,
            evaluation,
            keyboard_before,
            started,
            per_cell,
        }
    }

    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Number of cells whose status is visible at `now`
    #[must_use]
    pub fn revealed_count(&self, now: Instant) -> usize {
        let per_cell = self.per_cell.as_nanos();
        if per_cell == 0 {
            return WORD_LENGTH;
        }
        let elapsed = now.saturating_duration_since(self.started).as_nanos();
        usize::try_from(elapsed / per_cell)
            .unwrap_or(WORD_LENGTH)
            .min(WORD_LENGTH)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.revealed_count(now) == WORD_LENGTH
    }

    /// Moment the last cell is disclosed
    #[must_use]
    pub fn finishes_at(&self) -> Instant {
        self.started + self.per_cell * WORD_LENGTH as u32
    }

    /// Whether `col` is the cell being flipped at `now`
    #[must_use]
    pub fn is_revealing(&self, col: usize, now: Instant) -> bool {
        let count = self.revealed_count(now);
        count < WORD_LENGTH && col == count
    }

    /// Status to display for a cell of the revealed row
    #[must_use]
    pub fn visible_status(&self, col: usize, now: Instant) -> LetterStatus {
        if col < self.revealed_count(now) {
            self.evaluation.status_at(col)
        } else {
            LetterStatus::Empty
        }
    }

    /// Keyboard as it should look at `now`
    #[must_use]
    pub fn keyboard_view(&self, now: Instant) -> KeyboardState {
        let mut keyboard = self.keyboard_before.clone();
        let count = self.revealed_count(now);
        for (&letter, &status) in self
            .guess
            .letters()
            .iter()
            .zip(self.evaluation.statuses())
            .take(count)
        {
            keyboard.record(letter, status);
        }
        keyboard
    }
}
