//! Screen geometry
//!
//! Rendering and mouse hit-testing both derive their rectangles from
//! [`ScreenLayout`], so a click always lands on what was drawn there.

use super::input::{KEYBOARD_ROWS, VirtualKey, keyboard_row};
use crate::core::WORD_LENGTH;
use crate::game::MAX_ATTEMPTS;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

const HEADER_HEIGHT: u16 = 3;
/// Screen height needed for bordered tiles, header excluded
const TALL_HEIGHT: u16 = 32;

/// Tile and key dimensions for one screen size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Metrics {
    cell_width: u16,
    cell_height: u16,
    row_gap: u16,
    key_width: u16,
    wide_key_width: u16,
    key_height: u16,
    key_row_gap: u16,
}

impl Metrics {
    const TALL: Self = Self {
        cell_width: 7,
        cell_height: 3,
        row_gap: 0,
        key_width: 5,
        wide_key_width: 9,
        key_height: 3,
        key_row_gap: 0,
    };

    const COMPACT: Self = Self {
        cell_width: 5,
        cell_height: 1,
        row_gap: 1,
        key_width: 3,
        wide_key_width: 7,
        key_height: 1,
        key_row_gap: 1,
    };

    fn grid_height(self) -> u16 {
        let rows = MAX_ATTEMPTS as u16;
        rows * self.cell_height + (rows - 1) * self.row_gap
    }

    fn keyboard_height(self) -> u16 {
        let rows = KEYBOARD_ROWS.len() as u16;
        rows * self.key_height + (rows - 1) * self.key_row_gap
    }

    fn key_width_of(self, key: VirtualKey) -> u16 {
        match key {
            VirtualKey::Letter(_) => self.key_width,
            VirtualKey::Enter | VirtualKey::Backspace => self.wide_key_width,
        }
    }
}

/// Something clickable on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Cell { row: usize, col: usize },
    Key(VirtualKey),
}

/// Rectangles for every screen element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Option<Rect>,
    pub title: Rect,
    pub cells: [[Rect; WORD_LENGTH]; MAX_ATTEMPTS],
    pub keys: Vec<(VirtualKey, Rect)>,
    pub status: Rect,
    /// Whether tiles are tall enough for borders
    pub bordered: bool,
}

impl ScreenLayout {
    #[must_use]
    pub fn new(area: Rect, show_header: bool) -> Self {
        let header_height = if show_header { HEADER_HEIGHT } else { 0 };
        let bordered = area.height >= TALL_HEIGHT + header_height;
        let metrics = if bordered {
            Metrics::TALL
        } else {
            Metrics::COMPACT
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),        // Header
                Constraint::Length(1),                    // Title
                Constraint::Length(1),                    // Spacer
                Constraint::Length(metrics.grid_height()), // Grid
                Constraint::Length(1),                    // Spacer
                Constraint::Length(metrics.keyboard_height()), // Keyboard
                Constraint::Min(0),                       // Filler
                Constraint::Length(1),                    // Status line
            ])
            .split(area);

        let header = show_header.then_some(chunks[0]);
        let cells = grid_cells(chunks[3], metrics, area);
        let keys = keyboard_keys(chunks[5], metrics, area);

        Self {
            header,
            title: chunks[1],
            cells,
            keys,
            status: chunks[7],
            bordered,
        }
    }

    /// Element under a screen position
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let position = Position::new(column, row);

        for (r, cells) in self.cells.iter().enumerate() {
            for (c, rect) in cells.iter().enumerate() {
                if rect.contains(position) {
                    return Some(Hit::Cell { row: r, col: c });
                }
            }
        }

        self.keys
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|&(key, _)| Hit::Key(key))
    }
}

/// Offset that centers `width` inside `area`
fn centered_x(area: Rect, width: u16) -> u16 {
    area.x + area.width.saturating_sub(width) / 2
}

fn grid_cells(area: Rect, metrics: Metrics, screen: Rect) -> [[Rect; WORD_LENGTH]; MAX_ATTEMPTS] {
    let columns = WORD_LENGTH as u16;
    let width = columns * metrics.cell_width + (columns - 1);
    let x0 = centered_x(area, width);

    let mut cells = [[Rect::default(); WORD_LENGTH]; MAX_ATTEMPTS];
    for (r, row) in cells.iter_mut().enumerate() {
        let y = area.y + r as u16 * (metrics.cell_height + metrics.row_gap);
        for (c, rect) in row.iter_mut().enumerate() {
            let x = x0 + c as u16 * (metrics.cell_width + 1);
            *rect = Rect::new(x, y, metrics.cell_width, metrics.cell_height).intersection(screen);
        }
    }
    cells
}

fn keyboard_keys(area: Rect, metrics: Metrics, screen: Rect) -> Vec<(VirtualKey, Rect)> {
    let mut keys = Vec::new();

    for index in 0..KEYBOARD_ROWS.len() {
        let row = keyboard_row(index);
        let width: u16 = row.iter().map(|&k| metrics.key_width_of(k)).sum::<u16>()
            + (row.len() as u16).saturating_sub(1);
        let y = area.y + index as u16 * (metrics.key_height + metrics.key_row_gap);

        let mut x = centered_x(area, width);
        for key in row {
            let key_width = metrics.key_width_of(key);
            let rect = Rect::new(x, y, key_width, metrics.key_height).intersection(screen);
            keys.push((key, rect));
            x += key_width + 1;
        }
    }

    keys
}
