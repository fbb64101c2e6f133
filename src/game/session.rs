//! Turn controller
//!
//! A [`GameSession`] owns everything about one game: the target word, the
//! grid, the cursor, the keyboard summary and the phase. Every operation is
//! synchronous. Actions that make no sense in the current state are ignored
//! rather than reported, so callers can forward raw input without checking.

use super::grid::{Cell, Grid, MAX_ATTEMPTS};
use super::keyboard::KeyboardState;
use super::stats::GameOutcome;
use crate::core::{Evaluation, WORD_LENGTH, Word, evaluate};
use tracing::{debug, info};

/// Game phase; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GamePhase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Horizontal cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub evaluation: Evaluation,
}

/// What happened on a row submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Game over or row incomplete; nothing changed
    Rejected,
    /// Row evaluated, play moves to the next row
    Continue { row: usize, evaluation: Evaluation },
    /// Row matched the target
    Won { row: usize, evaluation: Evaluation },
    /// Last row evaluated without a match
    Lost { row: usize, evaluation: Evaluation },
}

impl SubmitOutcome {
    /// Row index and evaluation when the submission was accepted
    #[must_use]
    pub fn evaluated(&self) -> Option<(usize, Evaluation)> {
        match *self {
            Self::Rejected => None,
            Self::Continue { row, evaluation }
            | Self::Won { row, evaluation }
            | Self::Lost { row, evaluation } => Some((row, evaluation)),
        }
    }

    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected)
    }

    #[must_use]
    pub const fn ends_game(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }
}

/// One game in progress or finished
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    grid: Grid,
    keyboard: KeyboardState,
    row: usize,
    col: usize,
    phase: GamePhase,
    history: Vec<GuessRecord>,
}

impl GameSession {
    /// Start a fresh game for `target`
    #[must_use]
    pub fn new(target: Word) -> Self {
        debug!("new game session");
        Self {
            target,
            grid: Grid::new(),
            keyboard: KeyboardState::new(),
            row: 0,
            col: 0,
            phase: GamePhase::Playing,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current (row, column); the column may be 5 once a row is typed out
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Submitted guesses in order
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Number of submitted rows
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Outcome once the game is over
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            GamePhase::Playing => None,
            GamePhase::Won => Some(GameOutcome::Won {
                attempts: self.attempts(),
            }),
            GamePhase::Lost => Some(GameOutcome::Lost),
        }
    }

    /// Type a letter at the cursor and advance
    ///
    /// Returns whether the grid changed. Non-letters, a full row and a
    /// finished game are ignored.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if self.phase != GamePhase::Playing || self.col >= WORD_LENGTH {
            return false;
        }
        if !letter.is_ascii_alphabetic() {
            return false;
        }

        self.grid
            .set_letter(self.row, self.col, letter.to_ascii_uppercase());
        self.col += 1;
        true
    }

    /// Clear the letter at the cursor, or the one before it
    ///
    /// Returns whether the grid changed.
    pub fn remove_letter(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }

        let at_cursor = self
            .grid
            .cell(self.row, self.col)
            .is_some_and(Cell::is_filled);

        if at_cursor {
            self.grid.clear(self.row, self.col);
            true
        } else if self.col > 0 {
            self.col -= 1;
            self.grid.clear(self.row, self.col);
            true
        } else {
            false
        }
    }

    /// Move the cursor within the current row, clamped to the row
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }

        let next = match direction {
            Direction::Left => self.col.saturating_sub(1),
            Direction::Right if self.col < WORD_LENGTH - 1 => self.col + 1,
            Direction::Right => self.col,
        };
        let moved = next != self.col;
        self.col = next;
        moved
    }

    /// Put the cursor on a column of the current row
    pub fn select_column(&mut self, col: usize) -> bool {
        if self.phase != GamePhase::Playing || col >= WORD_LENGTH {
            return false;
        }
        self.col = col;
        true
    }

    /// Evaluate the current row
    ///
    /// Statuses and the keyboard are updated at once; the phase check runs
    /// win first, then last row, then advance.
    pub fn submit_row(&mut self) -> SubmitOutcome {
        if self.phase != GamePhase::Playing {
            return SubmitOutcome::Rejected;
        }
        let Some(guess) = self.grid.row_word(self.row) else {
            return SubmitOutcome::Rejected;
        };

        let row = self.row;
        let evaluation = evaluate(&guess, &self.target);
        self.grid.resolve_row(row, &evaluation);
        self.keyboard.record_evaluation(&guess, &evaluation);
        debug!(row, guess = %guess, feedback = %evaluation.to_emoji(), "row submitted");

        self.history.push(GuessRecord {
            guess: guess.clone(),
            evaluation,
        });

        if guess == self.target {
            self.phase = GamePhase::Won;
            info!(attempts = row + 1, "game won");
            return SubmitOutcome::Won { row, evaluation };
        }

        if row == MAX_ATTEMPTS - 1 {
            self.phase = GamePhase::Lost;
            info!(word = %self.target, "game lost");
            return SubmitOutcome::Lost { row, evaluation };
        }

        self.row += 1;
        self.col = 0;
        SubmitOutcome::Continue { row, evaluation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    fn session(target: &str) -> GameSession {
        GameSession::new(Word::new(target).unwrap())
    }

    fn type_word(session: &mut GameSession, word: &str) {
        for ch in word.chars() {
            session.add_letter(ch);
        }
    }

    fn guess(session: &mut GameSession, word: &str) -> SubmitOutcome {
        type_word(session, word);
        session.submit_row()
    }

    fn assert_grid_invariant(session: &GameSession) {
        let (row, _) = session.cursor();
        let grid = session.grid();
        for r in 0..row {
            assert!(grid.is_row_resolved(r), "row {r} should be finalized");
        }
        for r in row + 1..MAX_ATTEMPTS {
            assert!(grid.is_row_blank(r), "row {r} should be blank");
        }
    }

    #[test]
    fn add_letter_writes_and_advances() {
        let mut s = session("CARRO");
        assert!(s.add_letter('n'));
        assert_eq!(s.cursor(), (0, 1));
        let cell = s.grid().row(0)[0];
        assert_eq!(cell.letter, Some('N'));
        assert_eq!(cell.status, LetterStatus::Empty);
    }

    #[test]
    fn add_letter_beyond_last_column_is_noop() {
        let mut s = session("CARRO");
        type_word(&mut s, "NAVES");
        let before = s.grid().clone();

        assert!(!s.add_letter('X'));
        assert_eq!(s.cursor(), (0, 5));
        assert_eq!(s.grid(), &before);
    }

    #[test]
    fn add_letter_rejects_non_letters() {
        let mut s = session("CARRO");
        assert!(!s.add_letter('1'));
        assert!(!s.add_letter(' '));
        assert!(!s.add_letter('é'));
        assert_eq!(s.cursor(), (0, 0));
    }

    #[test]
    fn remove_letter_at_start_is_noop() {
        let mut s = session("CARRO");
        let before = s.grid().clone();
        assert!(!s.remove_letter());
        assert_eq!(s.cursor(), (0, 0));
        assert_eq!(s.grid(), &before);
    }

    #[test]
    fn remove_letter_moves_back_from_empty_cell() {
        let mut s = session("CARRO");
        type_word(&mut s, "NAV");
        assert!(s.remove_letter());
        assert_eq!(s.cursor(), (0, 2));
        assert!(!s.grid().row(0)[2].is_filled());
        assert!(s.grid().row(0)[1].is_filled());
    }

    #[test]
    fn remove_letter_clears_in_place_when_cursor_on_letter() {
        let mut s = session("CARRO");
        type_word(&mut s, "NAVES");
        s.select_column(1);

        assert!(s.remove_letter());
        assert_eq!(s.cursor(), (0, 1));
        assert!(!s.grid().row(0)[1].is_filled());
        assert!(s.grid().row(0)[2].is_filled());
    }

    #[test]
    fn remove_letter_from_full_row() {
        let mut s = session("CARRO");
        type_word(&mut s, "NAVES");
        assert!(s.remove_letter());
        assert_eq!(s.cursor(), (0, 4));
        assert!(!s.grid().row(0)[4].is_filled());
    }

    #[test]
    fn move_cursor_clamps() {
        let mut s = session("CARRO");
        assert!(!s.move_cursor(Direction::Left));
        assert_eq!(s.cursor(), (0, 0));

        for _ in 0..10 {
            s.move_cursor(Direction::Right);
        }
        assert_eq!(s.cursor(), (0, 4));
        assert!(s.move_cursor(Direction::Left));
        assert_eq!(s.cursor(), (0, 3));
        assert!(s.grid().is_row_blank(0));
    }

    #[test]
    fn typing_after_cursor_move_fills_gaps() {
        let mut s = session("CARRO");
        s.move_cursor(Direction::Right);
        s.move_cursor(Direction::Right);
        s.add_letter('R');
        assert_eq!(s.grid().row(0)[2].letter, Some('R'));
        assert!(!s.grid().row(0)[0].is_filled());
        assert_eq!(s.submit_row(), SubmitOutcome::Rejected);
    }

    #[test]
    fn select_column_bounds() {
        let mut s = session("CARRO");
        assert!(s.select_column(4));
        assert_eq!(s.cursor(), (0, 4));
        assert!(!s.select_column(5));
        assert_eq!(s.cursor(), (0, 4));
    }

    #[test]
    fn submit_incomplete_row_is_rejected() {
        let mut s = session("CARRO");
        type_word(&mut s, "NAVE");
        let before = s.grid().clone();

        assert_eq!(s.submit_row(), SubmitOutcome::Rejected);
        assert_eq!(s.grid(), &before);
        assert_eq!(s.cursor(), (0, 4));
        assert_eq!(s.phase(), GamePhase::Playing);
        assert!(s.keyboard().is_empty());
        assert_eq!(s.attempts(), 0);
    }

    #[test]
    fn carro_scenario_wins_on_third_guess() {
        let mut s = session("CARRO");

        let first = guess(&mut s, "NAVES");
        assert!(matches!(first, SubmitOutcome::Continue { row: 0, .. }));
        assert_eq!(s.phase(), GamePhase::Playing);
        assert_eq!(s.cursor(), (1, 0));
        assert_grid_invariant(&s);

        let second = guess(&mut s, "LIVRO");
        assert!(matches!(second, SubmitOutcome::Continue { row: 1, .. }));
        assert_eq!(s.phase(), GamePhase::Playing);
        assert_grid_invariant(&s);

        let third = guess(&mut s, "CARRO");
        assert_eq!(
            third,
            SubmitOutcome::Won {
                row: 2,
                evaluation: Evaluation::PERFECT
            }
        );
        assert_eq!(s.phase(), GamePhase::Won);
        assert!(
            s.grid()
                .row(2)
                .iter()
                .all(|c| c.status == LetterStatus::Correct)
        );
        assert_eq!(s.outcome(), Some(GameOutcome::Won { attempts: 3 }));
        // Cursor stays on the winning row
        assert_eq!(s.cursor().0, 2);
    }

    #[test]
    fn loss_after_sixth_guess_not_before() {
        let mut s = session("CARRO");
        let guesses = ["NAVES", "LIVRO", "PEDRA", "MUNDO", "TEMPO"];

        for (i, word) in guesses.iter().enumerate() {
            let outcome = guess(&mut s, word);
            assert!(matches!(outcome, SubmitOutcome::Continue { row, .. } if row == i));
            assert_eq!(s.phase(), GamePhase::Playing);
            assert!(s.outcome().is_none());
        }

        let last = guess(&mut s, "LUGAR");
        assert!(matches!(last, SubmitOutcome::Lost { row: 5, .. }));
        assert!(last.ends_game());
        assert_eq!(s.phase(), GamePhase::Lost);
        assert_eq!(s.outcome(), Some(GameOutcome::Lost));
        assert_eq!(s.attempts(), MAX_ATTEMPTS);
        assert!((0..MAX_ATTEMPTS).all(|r| s.grid().is_row_resolved(r)));
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let mut s = session("CARRO");
        for word in ["NAVES", "LIVRO", "PEDRA", "MUNDO", "TEMPO"] {
            guess(&mut s, word);
        }
        assert!(matches!(
            guess(&mut s, "CARRO"),
            SubmitOutcome::Won { row: 5, .. }
        ));
        assert_eq!(s.outcome(), Some(GameOutcome::Won { attempts: 6 }));
    }

    #[test]
    fn finished_game_ignores_input() {
        let mut s = session("CARRO");
        guess(&mut s, "CARRO");
        let grid = s.grid().clone();
        let cursor = s.cursor();

        assert!(!s.add_letter('A'));
        assert!(!s.remove_letter());
        assert!(!s.move_cursor(Direction::Left));
        assert!(!s.select_column(0));
        assert_eq!(s.submit_row(), SubmitOutcome::Rejected);
        assert_eq!(s.grid(), &grid);
        assert_eq!(s.cursor(), cursor);
    }

    #[test]
    fn submission_updates_keyboard_and_history() {
        let mut s = session("LLAMA");
        let outcome = guess(&mut s, "ALLOY");
        let (row, evaluation) = outcome.evaluated().unwrap();

        assert_eq!(row, 0);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history()[0].guess.text(), "ALLOY");
        assert_eq!(s.history()[0].evaluation, evaluation);
        assert_eq!(s.keyboard().status('L'), LetterStatus::Correct);
        assert_eq!(s.keyboard().status('A'), LetterStatus::Present);
        assert_eq!(s.keyboard().status('Y'), LetterStatus::Absent);
    }

    #[test]
    fn rejected_outcome_helpers() {
        assert!(!SubmitOutcome::Rejected.is_accepted());
        assert!(SubmitOutcome::Rejected.evaluated().is_none());
        assert!(!SubmitOutcome::Rejected.ends_game());
    }
}
