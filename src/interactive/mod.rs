//! Interactive TUI mode
//!
//! Full-screen game built on ratatui and crossterm.

mod app;
pub mod input;
pub mod layout;
mod rendering;
pub mod reveal;

pub use app::{App, CellView, Message, MessageStyle, run_tui};
pub use input::{Command, VirtualKey, map_key};
pub use layout::{Hit, ScreenLayout};
pub use reveal::Reveal;
