//! The 6x5 letter grid

use crate::core::{Evaluation, LetterStatus, WORD_LENGTH, Word};

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// One letter cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub status: LetterStatus,
}

impl Cell {
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.letter.is_some()
    }
}

/// Ordered rows of cells, one row per attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: [[Cell; WORD_LENGTH]; MAX_ATTEMPTS],
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rows(&self) -> &[[Cell; WORD_LENGTH]; MAX_ATTEMPTS] {
        &self.rows
    }

    /// Cells of one row
    ///
    /// # Panics
    /// Panics if row >= 6
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell; WORD_LENGTH] {
        &self.rows[row]
    }

    /// Cell at a position, `None` when out of bounds
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Write a pending letter
    pub(crate) fn set_letter(&mut self, row: usize, col: usize, letter: char) {
        self.rows[row][col] = Cell {
            letter: Some(letter),
            status: LetterStatus::Empty,
        };
    }

    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        self.rows[row][col] = Cell::default();
    }

    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows[row].iter().all(Cell::is_filled)
    }

    /// Letters of a full row as a word
    #[must_use]
    pub fn row_word(&self, row: usize) -> Option<Word> {
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, cell) in letters.iter_mut().zip(&self.rows[row]) {
            *slot = u8::try_from(cell.letter?).ok()?;
        }
        Some(Word::from_letters(letters))
    }

    /// Write evaluation results into a row
    pub(crate) fn resolve_row(&mut self, row: usize, evaluation: &Evaluation) {
        for (cell, &status) in self.rows[row].iter_mut().zip(evaluation.statuses()) {
            cell.status = status;
        }
    }

    /// Whether every cell of a row carries feedback
    #[must_use]
    pub fn is_row_resolved(&self, row: usize) -> bool {
        self.rows[row].iter().all(|c| c.status.is_resolved())
    }

    /// Whether a row has neither letters nor feedback
    #[must_use]
    pub fn is_row_blank(&self, row: usize) -> bool {
        self.rows[row].iter().all(|c| *c == Cell::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn fill(grid: &mut Grid, row: usize, word: &str) {
        for (col, ch) in word.chars().enumerate() {
            grid.set_letter(row, col, ch);
        }
    }

    #[test]
    fn new_grid_is_blank() {
        let grid = Grid::new();
        assert_eq!(grid.rows().len(), MAX_ATTEMPTS);
        assert!((0..MAX_ATTEMPTS).all(|r| grid.is_row_blank(r)));
        assert!(grid.cell(6, 0).is_none());
        assert!(grid.cell(0, 5).is_none());
    }

    #[test]
    fn row_word_requires_full_row() {
        let mut grid = Grid::new();
        fill(&mut grid, 0, "CARR");
        assert!(!grid.is_row_full(0));
        assert!(grid.row_word(0).is_none());

        grid.set_letter(0, 4, 'O');
        assert!(grid.is_row_full(0));
        assert_eq!(grid.row_word(0).unwrap().text(), "CARRO");
    }

    #[test]
    fn resolve_row_writes_statuses() {
        let mut grid = Grid::new();
        fill(&mut grid, 2, "ALLOY");
        let evaluation = evaluate(
            &Word::new("ALLOY").unwrap(),
            &Word::new("LLAMA").unwrap(),
        );

        assert!(!grid.is_row_resolved(2));
        grid.resolve_row(2, &evaluation);
        assert!(grid.is_row_resolved(2));
        assert_eq!(grid.row(2)[1].status, LetterStatus::Correct);
        assert_eq!(grid.row(2)[1].letter, Some('L'));
    }

    #[test]
    fn clear_resets_cell() {
        let mut grid = Grid::new();
        grid.set_letter(0, 3, 'Z');
        grid.clear(0, 3);
        assert!(grid.is_row_blank(0));
    }
}
