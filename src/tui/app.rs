use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::io::config_io::load_config;
use crate::model::{AppConfig, Todo, TodoFilter, TodoId};
use crate::ops::intent::{Intent, IntentOutcome};
use crate::ops::todo_ops::TodoStore;
use crate::util::line_edit::LineEdit;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing the title of a new todo
    Add,
    /// Editing an existing todo's title
    Edit,
}

/// An in-progress title edit
#[derive(Debug, Clone)]
pub struct EditSession {
    pub id: TodoId,
    pub input: LineEdit,
}

/// Main application state
pub struct App {
    pub store: TodoStore,
    pub filter: TodoFilter,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Cursor index into the filtered view
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// New-todo input (Add mode)
    pub add_input: LineEdit,
    /// Title edit (Edit mode)
    pub edit: Option<EditSession>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            store: TodoStore::new(),
            filter: config.ui.default_filter,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            cursor: 0,
            scroll_offset: 0,
            add_input: LineEdit::new(),
            edit: None,
        }
    }

    /// The todos shown under the current filter
    pub fn visible(&self) -> Vec<&Todo> {
        self.store.view(self.filter)
    }

    pub fn selected_id(&self) -> Option<TodoId> {
        self.visible().get(self.cursor).map(|t| t.id)
    }

    /// Apply an intent and keep the cursor on a valid row
    pub fn apply(&mut self, intent: Intent) -> IntentOutcome {
        let outcome = self.store.apply(intent);
        self.clamp_cursor();
        outcome
    }

    pub fn set_filter(&mut self, filter: TodoFilter) {
        if self.filter == filter {
            return;
        }
        // Keep the selected todo selected when it is still visible
        let selected = self.selected_id();
        self.filter = filter;
        self.cursor = selected
            .and_then(|id| self.visible().iter().position(|t| t.id == id))
            .unwrap_or(0);
        self.clamp_cursor();
        debug!(%filter, "filter changed");
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    /// Keep the cursor inside a window of `height` rows
    pub fn adjust_scroll(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
        let len = self.visible().len();
        if self.scroll_offset + height > len {
            self.scroll_offset = len.saturating_sub(height);
        }
    }

    // -----------------------------------------------------------------------
    // Add
    // -----------------------------------------------------------------------

    pub fn start_add(&mut self) {
        self.add_input.clear();
        self.mode = Mode::Add;
    }

    /// Add the typed title. Blank input creates nothing; either way the
    /// input is cleared and stays open for the next todo.
    pub fn commit_add(&mut self) {
        let title = self.add_input.take();
        if let IntentOutcome::Added(id) = self.apply(Intent::Add { title })
            && let Some(pos) = self.visible().iter().position(|t| t.id == id)
        {
            self.cursor = pos;
        }
    }

    pub fn cancel_add(&mut self) {
        self.add_input.clear();
        self.mode = Mode::Navigate;
    }

    // -----------------------------------------------------------------------
    // Edit
    // -----------------------------------------------------------------------

    /// Begin editing the selected todo, seeded with its title
    pub fn start_edit(&mut self) {
        let Some((id, title)) = self
            .visible()
            .get(self.cursor)
            .map(|t| (t.id, t.title.clone()))
        else {
            return;
        };
        self.edit = Some(EditSession {
            id,
            input: LineEdit::with_text(&title),
        });
        self.mode = Mode::Edit;
    }

    /// Commit the edit. A blank title deletes the todo.
    pub fn commit_edit(&mut self) {
        self.mode = Mode::Navigate;
        let Some(session) = self.edit.take() else {
            return;
        };
        let outcome = self.apply(Intent::Rename {
            id: session.id,
            title: session.input.text().to_string(),
        });
        info!(?outcome, "committed edit");
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
        self.mode = Mode::Navigate;
    }

    /// The line input for the current mode, if any
    pub fn active_input(&mut self) -> Option<&mut LineEdit> {
        match self.mode {
            Mode::Navigate => None,
            Mode::Add => Some(&mut self.add_input),
            Mode::Edit => self.edit.as_mut().map(|s| &mut s.input),
        }
    }
}

/// Run the TUI application
pub fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    info!("tui started");
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    info!(total = app.store.len(), "tui exited");

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
