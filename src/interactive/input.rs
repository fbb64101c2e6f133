//! Keyboard input mapping
//!
//! Physical key events and on-screen key clicks both end up as a [`Command`].

use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Logical action requested by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Type an (uppercase) letter
    Letter(char),
    Backspace,
    Submit,
    Move(Direction),
    NewWord,
    ToggleStats,
    ToggleHelp,
    ToggleHeader,
    CloseOverlay,
    Quit,
}

impl Command {
    /// Whether the command edits or submits the grid
    #[must_use]
    pub const fn affects_game(self) -> bool {
        matches!(
            self,
            Self::Letter(_) | Self::Backspace | Self::Submit | Self::Move(_)
        )
    }
}

/// Key of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualKey {
    Letter(char),
    Enter,
    Backspace,
}

impl VirtualKey {
    #[must_use]
    pub const fn command(self) -> Command {
        match self {
            Self::Letter(c) => Command::Letter(c),
            Self::Enter => Command::Submit,
            Self::Backspace => Command::Backspace,
        }
    }

    /// Text shown on the key
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(c) => c.to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }
}

/// On-screen keyboard rows; ENTER and backspace flank the last row
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Keys of one on-screen keyboard row in display order
#[must_use]
pub fn keyboard_row(index: usize) -> Vec<VirtualKey> {
    let mut keys: Vec<VirtualKey> = KEYBOARD_ROWS[index].chars().map(VirtualKey::Letter).collect();
    if index == KEYBOARD_ROWS.len() - 1 {
        keys.insert(0, VirtualKey::Enter);
        keys.push(VirtualKey::Backspace);
    }
    keys
}

/// Map a terminal key event to a command
///
/// Letters are case-insensitive and dispatched uppercase. Only key presses
/// count; repeats and releases are ignored.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Command> {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C' | 'q' | 'Q') => Some(Command::Quit),
            KeyCode::Char('n' | 'N') => Some(Command::NewWord),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Command::Letter(c.to_ascii_uppercase())),
        KeyCode::Enter => Some(Command::Submit),
        KeyCode::Backspace | KeyCode::Delete => Some(Command::Backspace),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::F(1) | KeyCode::Char('?') => Some(Command::ToggleHelp),
        KeyCode::F(2) => Some(Command::ToggleStats),
        KeyCode::F(3) => Some(Command::ToggleHeader),
        KeyCode::F(5) => Some(Command::NewWord),
        KeyCode::Esc => Some(Command::CloseOverlay),
        _ => None,
    }
}
