//! Play command implementation - interactive TUI.
//!
//! Thin glue over the engine: translates key presses into logical
//! directions, renders read-only state snapshots, and restarts the
//! game when a finished one is acknowledged.

// TUI rendering uses intentional casts for layout arithmetic
#![allow(clippy::cast_possible_truncation)]

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::stdout;
use std::time::Duration;
use tessera::{Direction, GameConfig, GameState, Status};

/// Rendered width of one cell in characters.
const CELL_WIDTH: usize = 7;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the TUI fails.
pub(crate) fn execute(grid_size: usize, target: u32, seed: Option<u64>) -> Result<(), CliError> {
    let config = GameConfig { grid_size, target };

    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let app = App::new(config, seed)?;
    run_tui(app)
}

/// App state for the TUI.
struct App {
    config: GameConfig,
    seed: u64,
    state: GameState,
}

impl App {
    fn new(config: GameConfig, seed: u64) -> Result<Self, CliError> {
        let state = GameState::new(&config, seed)?;
        Ok(Self {
            config,
            seed,
            state,
        })
    }

    /// Apply a move; terminal states absorb it inside the engine.
    fn apply(&mut self, direction: Direction) {
        self.state = self.state.apply_move(direction);
    }

    /// Start a fresh game on the next seed.
    fn restart(&mut self) -> Result<(), CliError> {
        self.seed = self.seed.wrapping_add(1);
        self.state = GameState::new(&self.config, self.seed)?;
        Ok(())
    }
}

/// Translate a raw key into a logical direction.
///
/// Unrecognized keys produce `None` and no move is applied.
fn translate_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Direction::Right),
        _ => None,
    }
}

fn run_tui(mut app: App) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    loop {
        // Draw
        terminal
            .draw(|f| ui(f, &app))
            .map_err(|e| CliError::new(e.to_string()))?;

        // Handle input with timeout
        if event::poll(Duration::from_millis(100)).map_err(|e| CliError::new(e.to_string()))?
            && let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('r') => app.restart()?,
                code => {
                    if let Some(direction) = translate_key(code) {
                        app.apply(direction);
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),                                // Header
        Constraint::Min(app.config.grid_size as u16 * 2 + 3), // Board
        Constraint::Length(3),                                // Footer
    ])
    .split(f.area());

    render_header(f, chunks[0], app);
    render_board(f, chunks[1], app);
    render_footer(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let status = match app.state.status() {
        Status::InProgress => "PLAYING",
        Status::Won => "YOU WIN",
        Status::Lost => "GAME OVER",
    };

    let title = format!(
        " Tessera | Score: {} | Target: {} | {} | Seed: {} ",
        app.state.score(),
        app.state.target(),
        status,
        app.seed
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let size = app.state.board().size();
    let mut lines: Vec<Line> = Vec::new();

    for row in 0..size {
        let mut spans = Vec::new();
        for col in 0..size {
            let value = app.state.board().get_at(row, col).unwrap_or(0);
            spans.push(tile_span(value));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if app.state.is_over() {
        let message = match app.state.status() {
            Status::Won => "Congratulations, you reached the target! [r] for a new game",
            Status::Lost => "No room left. [r] for a new game",
            Status::InProgress => "",
        };
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
    }

    let board_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Board "));

    f.render_widget(board_widget, area);
}

/// Render one cell as a fixed-width colored span.
fn tile_span(value: u32) -> Span<'static> {
    if value == 0 {
        return Span::styled(
            format!("{:^CELL_WIDTH$}", "\u{b7}"),
            Style::default().fg(Color::DarkGray),
        );
    }

    let (bg, fg) = tile_palette(value);
    Span::styled(
        format!("{value:^CELL_WIDTH$}"),
        Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD),
    )
}

/// Background and foreground colors for a tile value.
fn tile_palette(value: u32) -> (Color, Color) {
    let bg = match value {
        2 => Color::Rgb(0xDC, 0xD5, 0xD3),
        4 => Color::Rgb(0xE3, 0xDD, 0x8A),
        8 => Color::Rgb(0xF2, 0xAC, 0x34),
        16 => Color::Rgb(0xF9, 0x9B, 0x19),
        32 => Color::Rgb(0xEE, 0x69, 0x15),
        64 => Color::Rgb(0xFB, 0x4D, 0x19),
        128 => Color::Rgb(0xF4, 0xD1, 0x55),
        256 => Color::Rgb(0xEB, 0xD0, 0x45),
        512 => Color::Rgb(0xE5, 0xC2, 0x36),
        1024 => Color::Rgb(0xE3, 0xBC, 0x16),
        v if v >= 2048 => Color::Rgb(0xEF, 0xCB, 0x53),
        _ => Color::Rgb(0xA5, 0xA5, 0xA5),
    };

    let fg = match value {
        2 => Color::Rgb(0x49, 0x48, 0x46),
        4 => Color::Rgb(0x5E, 0x4D, 0x3F),
        8 => Color::Rgb(0xD6, 0xD8, 0xD6),
        16 => Color::Rgb(0xE7, 0xF8, 0xFF),
        32 => Color::Rgb(0xDC, 0xEE, 0xFD),
        64 => Color::Rgb(0xF3, 0xE8, 0xD4),
        v if v >= 128 => Color::Rgb(0xEB, 0xEA, 0xEA),
        _ => Color::Rgb(0xA5, 0xA5, 0xA5),
    };

    (bg, fg)
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.state.is_over() {
        " [q] Quit  [r] New game "
    } else {
        " [q] Quit  [r] Restart  [arrows/hjkl] Move "
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
