//! TUI application state and logic

use super::input::{Command, map_key};
use super::layout::{Hit, ScreenLayout};
use super::reveal::Reveal;
use crate::config::Config;
use crate::core::{LetterStatus, Word};
use crate::game::{
    GameOutcome, GamePhase, GameSession, KeyboardState, SessionStats, Stats, StatsStore,
    SubmitOutcome,
};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Instant;
use tracing::{debug, info};

/// Application state
pub struct App {
    pub session: GameSession,
    pub words: WordSource,
    pub config: Config,
    pub stats: Stats,
    pub show_stats: bool,
    pub show_help: bool,
    pub show_header: bool,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    store: Box<dyn StatsStore>,
    reveal: Option<Reveal>,
    stats_due: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// What the renderer needs to draw one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub letter: Option<char>,
    pub status: LetterStatus,
    /// Cell is being flipped by the reveal animation
    pub revealing: bool,
    /// Cell holds the typing cursor
    pub cursor: bool,
}

impl App {
    /// Create the app, starting with the daily or a random word per `config`
    #[must_use]
    pub fn new(words: WordSource, config: Config) -> Self {
        let target = if config.daily {
            words.today().clone()
        } else {
            words.random(&mut rand::rng()).clone()
        };
        Self::with_target(words, config, target)
    }

    /// Create the app with a known target word
    #[must_use]
    pub fn with_target(words: WordSource, config: Config, target: Word) -> Self {
        let store: Box<dyn StatsStore> = Box::new(SessionStats::new());
        let stats = store.snapshot();
        let show_header = config.show_header;

        Self {
            session: GameSession::new(target),
            words,
            config,
            stats,
            show_stats: false,
            show_help: false,
            show_header,
            messages: vec![Message {
                text: "Guess the word in 6 tries. F1 for help.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            store,
            reveal: None,
            stats_due: None,
        }
    }

    /// Replace the statistics collaborator
    #[must_use]
    pub fn with_stats_store(mut self, store: Box<dyn StatsStore>) -> Self {
        self.stats = store.snapshot();
        self.store = store;
        self
    }

    /// Whether a row reveal is still running at `now`
    #[must_use]
    pub fn is_revealing(&self, now: Instant) -> bool {
        self.reveal.as_ref().is_some_and(|r| !r.is_finished(now))
    }

    /// Whether a modal overlay covers the board
    #[must_use]
    pub fn overlay_open(&self) -> bool {
        self.show_stats || self.show_help
    }

    /// Dispatch one command
    pub fn handle(&mut self, command: Command, now: Instant) {
        if command.affects_game() && (self.is_revealing(now) || self.overlay_open()) {
            return;
        }

        match command {
            Command::Letter(c) => {
                self.session.add_letter(c);
            }
            Command::Backspace => {
                self.session.remove_letter();
            }
            Command::Move(direction) => {
                self.session.move_cursor(direction);
            }
            Command::Submit => self.submit(now),
            Command::NewWord => {
                if !self.is_revealing(now) {
                    self.new_random_word();
                }
            }
            Command::ToggleStats => {
                self.show_stats = !self.show_stats;
                self.show_help = false;
            }
            Command::ToggleHelp => {
                self.show_help = !self.show_help;
                self.show_stats = false;
            }
            Command::ToggleHeader => self.show_header = !self.show_header,
            Command::CloseOverlay => {
                self.show_stats = false;
                self.show_help = false;
            }
            Command::Quit => self.should_quit = true,
        }
    }

    fn submit(&mut self, now: Instant) {
        let keyboard_before = self.session.keyboard().clone();
        let outcome = self.session.submit_row();
        let Some((row, evaluation)) = outcome.evaluated() else {
            return;
        };

        let guess = self.session.history()[row].guess.clone();
        let reveal = Reveal::new(
            row,
            guess,
            evaluation,
            keyboard_before,
            now,
            self.config.reveal_delay(),
        );
        let finishes_at = reveal.finishes_at();
        self.reveal = Some(reveal);

        if let Some(result) = self.session.outcome() {
            self.finish_game(result, &outcome);
            self.stats_due = Some(finishes_at + self.config.result_delay());
        }
    }

    fn finish_game(&mut self, result: GameOutcome, outcome: &SubmitOutcome) {
        self.stats = self.store.record(result);
        info!(?result, played = self.stats.games_played, "game recorded");

        match outcome {
            SubmitOutcome::Won { row, .. } => {
                let celebration = match row + 1 {
                    1 => "Hole in one!",
                    2 => "Magnificent!",
                    3 => "Splendid!",
                    4 => "Great job!",
                    5 => "Nice work!",
                    _ => "Phew!",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            SubmitOutcome::Lost { .. } => {
                let text = format!("The word was {}", self.session.target());
                self.add_message(&text, MessageStyle::Error);
            }
            SubmitOutcome::Rejected | SubmitOutcome::Continue { .. } => {}
        }
    }

    /// Advance timers: finish reveals and open the statistics when due
    pub fn on_tick(&mut self, now: Instant) {
        if self.reveal.as_ref().is_some_and(|r| r.is_finished(now)) {
            self.reveal = None;
        }
        if self.stats_due.is_some_and(|due| now >= due) {
            self.stats_due = None;
            self.show_stats = true;
            self.show_help = false;
        }
    }

    /// Reset everything for a new random target
    pub fn new_random_word(&mut self) {
        let target = self.words.random(&mut rand::rng()).clone();
        self.start_game(target);
    }

    /// Reset everything for `target`
    pub fn start_game(&mut self, target: Word) {
        debug!("starting new game");
        self.session = GameSession::new(target);
        self.reveal = None;
        self.stats_due = None;
        self.show_stats = false;
        self.show_help = false;
        self.messages.clear();
        self.add_message("New word! Good luck.", MessageStyle::Info);
    }

    /// Handle a mouse event against the current layout
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &ScreenLayout, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match layout.hit(mouse.column, mouse.row) {
            Some(Hit::Key(key)) => self.handle(key.command(), now),
            Some(Hit::Cell { row, col }) => {
                if self.is_revealing(now) || self.overlay_open() {
                    return;
                }
                if row == self.session.cursor().0 {
                    self.session.select_column(col);
                }
            }
            None => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Cell as it should be drawn at `now`
    #[must_use]
    pub fn cell_view(&self, row: usize, col: usize, now: Instant) -> CellView {
        let cell = self.session.grid().row(row)[col];
        let (cursor_row, cursor_col) = self.session.cursor();

        let (status, revealing) = match &self.reveal {
            Some(reveal) if reveal.row() == row => {
                (reveal.visible_status(col, now), reveal.is_revealing(col, now))
            }
            _ => (cell.status, false),
        };

        CellView {
            letter: cell.letter,
            status,
            revealing,
            cursor: self.session.phase() == GamePhase::Playing
                && row == cursor_row
                && col == cursor_col,
        }
    }

    /// Keyboard as it should be drawn at `now`
    #[must_use]
    pub fn keyboard_view(&self, now: Instant) -> KeyboardState {
        match &self.reveal {
            Some(reveal) => reveal.keyboard_view(now),
            None => self.session.keyboard().clone(),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal; every step runs even if an earlier one fails
    let raw = disable_raw_mode();
    let screen = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let cursor = terminal.show_cursor();

    first_error(res, raw.and(screen).and(cursor))
}

/// Error of the loop if any, else the error of the terminal restore
fn first_error(run: Result<()>, restore: io::Result<()>) -> Result<()> {
    run?;
    restore?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    info!(words = app.words.len(), "game started");
    let tick = app.config.tick();
    let mut area = Rect::default();

    loop {
        let now = Instant::now();
        app.on_tick(now);
        terminal.draw(|f| {
            area = f.area();
            super::rendering::ui(f, &app, now);
        })?;

        if !event::poll(tick)? {
            continue;
        }

        let now = Instant::now();
        match event::read()? {
            Event::Key(key) => {
                if let Some(command) = map_key(key) {
                    app.handle(command, now);
                }
            }
            Event::Mouse(mouse) => {
                let layout = ScreenLayout::new(area, app.show_header);
                app.handle_mouse(mouse, &layout, now);
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    info!("quitting");
    Ok(())
}
