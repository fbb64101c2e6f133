//! Game state
//!
//! The grid, the keyboard summary, the turn controller that drives them and
//! the statistics collaborator that records finished games. Nothing in here
//! touches the terminal or the clock.

mod grid;
mod keyboard;
mod session;
mod stats;

pub use grid::{Cell, Grid, MAX_ATTEMPTS};
pub use keyboard::{KeyboardState, upgrade};
pub use session::{Direction, GamePhase, GameSession, GuessRecord, SubmitOutcome};
pub use stats::{GameOutcome, SessionStats, Stats, StatsStore};
