//! Terminal output formatting
//!
//! Colored printing for the line-based commands and share text helpers.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_daily, print_keyboard, print_row, print_stats};
pub use formatters::share_text;
