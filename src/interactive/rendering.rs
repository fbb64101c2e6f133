//! TUI rendering with ratatui
//!
//! Grid, on-screen keyboard, header and the statistics/help overlays.

use super::app::{App, CellView, MessageStyle};
use super::layout::ScreenLayout;
use crate::core::LetterStatus;
use crate::game::{GamePhase, MAX_ATTEMPTS};
use crate::output::formatters::distribution_bar_width;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use std::time::Instant;

const BACKGROUND: Color = Color::Rgb(0x6e, 0x5f, 0x60);
const HEADER_BG: Color = Color::Rgb(0x1a, 0x1a, 0x1a);
const MODAL_BG: Color = Color::Rgb(0x2a, 0x2a, 0x2a);
const BAR_TRACK: Color = Color::Rgb(0x44, 0x44, 0x44);
const CORRECT: Color = Color::Rgb(0x3a, 0xa3, 0x94);
const PRESENT: Color = Color::Rgb(0xd3, 0xad, 0x69);
const ABSENT: Color = Color::Rgb(0x31, 0x2a, 0x2b);
const EMPTY_TILE: Color = Color::Rgb(0x4a, 0x40, 0x41);
const EMPTY_BORDER: Color = Color::Rgb(0x56, 0x56, 0x56);
const KEY_DEFAULT: Color = Color::Rgb(0x81, 0x83, 0x84);
const CURSOR: Color = Color::Yellow;

/// Background color for a tile status
#[must_use]
pub const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => CORRECT,
        LetterStatus::Present => PRESENT,
        LetterStatus::Absent => ABSENT,
        LetterStatus::Empty => EMPTY_TILE,
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), area);

    let layout = ScreenLayout::new(area, app.show_header);

    if let Some(header) = layout.header {
        render_header(f, header);
    }
    render_title(f, layout.title);
    render_grid(f, app, &layout, now);
    render_keyboard(f, app, &layout, now);
    render_status(f, app, layout.status);

    if app.show_stats {
        render_stats(f, app, area);
    } else if app.show_help {
        render_help(f, area);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " termo ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "solo",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
        Span::raw("   "),
        Span::styled(
            "F1 help  F2 stats  F3 hide menu  F5 new word  Ctrl+C quit",
            Style::default().fg(Color::Gray),
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Plain)
            .style(Style::default().bg(HEADER_BG).fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("TERMO")
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn render_grid(f: &mut Frame, app: &App, layout: &ScreenLayout, now: Instant) {
    for (row, cells) in layout.cells.iter().enumerate() {
        for (col, &rect) in cells.iter().enumerate() {
            let view = app.cell_view(row, col, now);
            render_cell(f, view, rect, layout.bordered);
        }
    }
}

fn render_cell(f: &mut Frame, view: CellView, rect: Rect, bordered: bool) {
    let letter = view.letter.map(String::from).unwrap_or_default();
    let mut style = Style::default()
        .fg(Color::White)
        .bg(status_color(view.status))
        .add_modifier(Modifier::BOLD);
    if view.revealing {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let mut tile = Paragraph::new(letter)
        .alignment(Alignment::Center)
        .style(style);

    if bordered {
        let border_color = if view.cursor {
            CURSOR
        } else if view.status == LetterStatus::Empty {
            EMPTY_BORDER
        } else {
            status_color(view.status)
        };
        let border_type = if view.cursor {
            BorderType::Thick
        } else {
            BorderType::Plain
        };
        tile = tile.block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(border_color)),
        );
    } else if view.cursor {
        tile = tile.style(style.fg(CURSOR).add_modifier(Modifier::UNDERLINED));
    }

    f.render_widget(tile, rect);
}

fn render_keyboard(f: &mut Frame, app: &App, layout: &ScreenLayout, now: Instant) {
    let keyboard = app.keyboard_view(now);

    for &(key, rect) in &layout.keys {
        let bg = match key {
            super::input::VirtualKey::Letter(c) => match keyboard.status(c) {
                LetterStatus::Empty => KEY_DEFAULT,
                status => status_color(status),
            },
            _ => KEY_DEFAULT,
        };
        let style = Style::default()
            .fg(Color::White)
            .bg(bg)
            .add_modifier(Modifier::BOLD);

        let mut widget = Paragraph::new(key.label())
            .alignment(Alignment::Center)
            .style(style);
        if layout.bordered {
            widget = widget.block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(bg)),
            );
        }
        f.render_widget(widget, rect);
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    if let Some(message) = app.messages.last() {
        let color = match message.style {
            MessageStyle::Info => Color::White,
            MessageStyle::Success => Color::Green,
            MessageStyle::Error => Color::LightRed,
        };
        let text = Paragraph::new(format!(" {}", message.text))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
        f.render_widget(text, chunks[0]);
    }

    let help_text = if app.show_header {
        format!("Attempt {} ", attempt_label(app))
    } else {
        format!("{} | F1 help | F3 menu ", attempt_label(app))
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(help, chunks[1]);
}

fn attempt_label(app: &App) -> String {
    match app.session.phase() {
        GamePhase::Playing => format!("{}/{MAX_ATTEMPTS}", app.session.cursor().0 + 1),
        GamePhase::Won => format!("{}/{MAX_ATTEMPTS}", app.session.attempts()),
        GamePhase::Lost => format!("X/{MAX_ATTEMPTS}"),
    }
}

/// Rectangle of at most `width` x `height` centered in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(MODAL_BG).fg(Color::White))
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let modal = centered_rect(48, 19, area);
    f.render_widget(Clear, modal);

    let stats = &app.stats;
    let label = Style::default().fg(Color::Gray);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::styled(
            format!(
                "{:^11}{:^11}{:^11}{:^11}",
                stats.games_played,
                format!("{}%", stats.win_percentage),
                stats.current_streak,
                stats.max_streak
            ),
            bold,
        ),
        Line::styled(
            format!(
                "{:^11}{:^11}{:^11}{:^11}",
                "games", "win rate", "streak", "best"
            ),
            label,
        ),
        Line::raw(""),
        Line::styled("guess distribution", bold),
    ];

    let bar_space = usize::from(modal.width.saturating_sub(8));
    let max = stats.max_bucket();
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        lines.push(distribution_line(&(i + 1).to_string(), count, max, bar_space));
    }
    lines.push(distribution_line("💀", stats.losses, 0, bar_space));

    lines.push(Line::raw(""));
    if app.session.phase().is_over() {
        lines.push(Line::from(vec![
            Span::styled("word: ", label),
            Span::styled(app.session.target().text().to_string(), bold),
        ]));
    } else {
        lines.push(Line::raw(""));
    }
    lines.push(Line::styled("F5 new word · Esc close", label));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(modal_block(" Progress "));
    f.render_widget(paragraph, modal);
}

/// One distribution row; `max` of zero draws the count without a bar
fn distribution_line(label: &str, count: u32, max: u32, width: usize) -> Line<'static> {
    let prefix = Span::raw(format!("{label:>2} "));
    let bar_width = if max == 0 {
        0
    } else {
        distribution_bar_width(count, max, width)
    };

    if bar_width == 0 {
        return Line::from(vec![
            prefix,
            Span::styled(
                format!("{:<width$}", count.to_string()),
                Style::default().fg(Color::DarkGray).bg(BAR_TRACK),
            ),
        ]);
    }

    let count_text = count.to_string();
    let bar = format!("{count_text:>bar_width$}");
    Line::from(vec![
        prefix,
        Span::styled(
            bar,
            Style::default()
                .bg(CORRECT)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " ".repeat(width.saturating_sub(bar_width.max(count_text.len()))),
            Style::default().bg(BAR_TRACK),
        ),
    ])
}

fn render_help(f: &mut Frame, area: Rect) {
    let modal = centered_rect(52, 17, area);
    f.render_widget(Clear, modal);

    let tile = |letter: &'static str, status: LetterStatus| {
        Span::styled(
            format!(" {letter} "),
            Style::default()
                .bg(status_color(status))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    };

    let lines = vec![
        Line::raw("Guess the word in 6 tries."),
        Line::raw("Type 5 letters and press Enter to submit."),
        Line::raw(""),
        Line::from(vec![
            tile("C", LetterStatus::Correct),
            Span::raw(" correct: right letter, right spot"),
        ]),
        Line::from(vec![
            tile("A", LetterStatus::Present),
            Span::raw(" present: in the word, another spot"),
        ]),
        Line::from(vec![
            tile("R", LetterStatus::Absent),
            Span::raw(" absent: not in the word"),
        ]),
        Line::raw(""),
        Line::raw("←/→ move the cursor   Backspace erase"),
        Line::raw("Mouse: click a tile or a key"),
        Line::raw("F2 statistics   F3 menu   F5 new word"),
        Line::raw("Esc close   Ctrl+C quit"),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(modal_block(" How to play "));
    f.render_widget(paragraph, modal);
}
