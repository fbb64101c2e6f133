//! Command implementations

pub mod check;
pub mod daily;
pub mod simple;

pub use check::{CheckResult, check_guess};
pub use daily::daily_word;
pub use simple::{GameEnd, play_game, run_simple};
