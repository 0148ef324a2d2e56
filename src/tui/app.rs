use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::dataset;
use crate::model::{Board, Message};
use crate::ops::group;
use crate::ops::reorder::DragState;
use crate::tui::theme::{Theme, load_theme_config};
use crate::tui::{input, render};

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the wall
    Navigate,
    /// A tile is grabbed and riding the cursor
    Drag,
    /// The add-tile form is open
    Form,
}

/// Which add-tile form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Date,
    Message,
}

/// Draft state for the add-tile form overlay
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub date_input: String,
    pub message_input: String,
    pub focus: FormField,
    /// Validation message shown until the next edit
    pub error: Option<String>,
}

impl FormState {
    pub fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Date => &mut self.date_input,
            FormField::Message => &mut self.message_input,
        }
    }
}

/// A tile's position in the grouped view: which year group, and where
/// within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePos {
    pub year: i32,
    pub index: usize,
}

/// Top-level TUI state
pub struct App {
    pub board: Board,
    pub drag: DragState,
    pub mode: Mode,
    pub theme: Theme,
    pub should_quit: bool,

    /// Cursor as a flat index into `visible_tiles()`
    pub cursor: usize,
    /// First visible wall row (render adjusts this to keep the cursor
    /// on screen)
    pub scroll_offset: usize,
    /// Tile columns at the last render; navigation uses it for up/down
    pub grid_cols: usize,

    pub form: Option<FormState>,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl App {
    pub fn new(board: Board, theme: Theme) -> Self {
        App {
            board,
            drag: DragState::Idle,
            mode: Mode::Navigate,
            theme,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            grid_cols: 1,
            form: None,
            show_help: false,
            status_message: None,
            status_is_error: false,
        }
    }

    /// Every tile position in display order: years newest-first, tiles in
    /// store order within each year. The flat cursor indexes into this.
    pub fn visible_tiles(&self) -> Vec<TilePos> {
        let groups = group::by_year(self.board.records());
        let mut tiles = Vec::with_capacity(self.board.len());
        for year in group::years_newest_first(&groups) {
            let len = groups.get(&year).map_or(0, |g| g.len());
            for index in 0..len {
                tiles.push(TilePos { year, index });
            }
        }
        tiles
    }

    /// The tile under the cursor, if the wall is non-empty.
    pub fn cursor_tile(&self) -> Option<TilePos> {
        self.visible_tiles().get(self.cursor).copied()
    }

    /// Look up the record at a grouped position.
    pub fn tile_message(&self, pos: TilePos) -> Option<Message> {
        group::by_year(self.board.records())
            .get(&pos.year)
            .and_then(|tiles| tiles.get(pos.index))
            .cloned()
    }

    /// Keep the cursor inside the wall after the store changes size.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_tiles().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Point the cursor at a grouped position, if it exists.
    pub fn select_tile(&mut self, pos: TilePos) {
        if let Some(flat) = self.visible_tiles().iter().position(|p| *p == pos) {
            self.cursor = flat;
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = true;
    }
}

/// Run the TUI application
pub fn run(data: Option<&str>, theme: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let records = match data {
        Some(path) => dataset::load(std::path::Path::new(path))?,
        None => dataset::builtin(),
    };
    let theme = match theme {
        Some(path) => Theme::from_config(&load_theme_config(std::path::Path::new(path))?),
        None => Theme::default(),
    };

    let mut app = App::new(Board::new(records), theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
