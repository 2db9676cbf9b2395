//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod layout;
pub mod log_pane;
pub mod status_bar;
pub mod styles;

pub use log_pane::{LogPaneWidget, PaneGeometry, PaneLayout, PaneRow};
pub use status_bar::{StatusBar, StatusInfo};
pub use styles::{ColorConfig, PaneStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::{InputError, KeyAction};
use crate::source::InputSource;
use crate::state::prompt::{
    handle_backspace, handle_char_input, handle_cursor_left, handle_cursor_right, submit,
};
use crate::state::{FilterProgress, LogView, LogViewOptions, Prompt, PromptKind, PromptOutcome};
use crate::store::LogStore;
use crate::view_state::{CursorPoint, FrameLine};
use constants::{EVENT_POLL_TIMEOUT, FALLBACK_WIDTH, HORIZONTAL_SCROLL_STEP, MOUSE_SCROLL_LINES};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    store: LogStore,
    log_view: LogView,
    input_source: InputSource,
    key_bindings: KeyBindings,
    styles: PaneStyles,
    prompt: Option<Prompt>,
    live: bool,
    /// Initial search waiting for live input to arrive
    pending_search: Option<String>,
    /// Last drawn pane rows (for click mapping)
    pane_layout: PaneLayout,
    /// Last drawn pane area (for click mapping)
    pane_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(input_source: InputSource, options: LogViewOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Self::with_terminal(terminal, input_source, options)
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Input is polled every
    /// [`EVENT_POLL_TIMEOUT`]; the screen is redrawn after user input or
    /// when the log view requests it.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let mut dirty = false;
            if event::poll(EVENT_POLL_TIMEOUT)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                        dirty = true;
                    }
                    _ => {}
                }
            }

            dirty |= self.tick(Instant::now())?;
            let requested = self.log_view.take_redraw_request();
            if dirty || requested {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build the app on an existing terminal and load the initial input.
    ///
    /// # Errors
    ///
    /// Returns `TuiError::Input` if the first poll of the source fails.
    pub fn with_terminal(
        terminal: Terminal<B>,
        mut input_source: InputSource,
        options: LogViewOptions,
    ) -> Result<Self, TuiError> {
        let mut store = LogStore::new();
        let mut log_view = LogView::new(options);
        log_view.attach(&mut store);

        let now = Instant::now();
        input_source.drain_into(&mut store)?;
        log_view.poll_store(&store, now);
        info!(records = store.total_count(), "initial input loaded");

        let live = input_source.is_live();
        Ok(Self {
            terminal,
            store,
            log_view,
            input_source,
            key_bindings: KeyBindings::default(),
            styles: PaneStyles::default(),
            prompt: None,
            live,
            pending_search: None,
            pane_layout: PaneLayout::default(),
            pane_area: None,
        })
    }

    /// Replace the pane styles.
    pub fn with_styles(mut self, styles: PaneStyles) -> Self {
        self.styles = styles;
        self
    }

    /// The record store.
    pub fn store(&self) -> &LogStore {
        &self.store
    }

    /// The pane's view state.
    pub fn log_view(&self) -> &LogView {
        &self.log_view
    }

    /// The open prompt, if any.
    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// The terminal (for buffer inspection with a test backend).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Submit the initial search.
    ///
    /// A live source with nothing loaded yet keeps the term until a later
    /// [`tick`](Self::tick) appends a matching record or the source finishes.
    pub fn search(&mut self, term: &str) {
        if self.store.is_empty() && self.input_source.is_live() {
            debug!(term, "search deferred until input arrives");
            self.pending_search = Some(term.to_string());
            return;
        }
        self.log_view.new_search(term, &self.store);
    }

    /// The deferred initial search term, if it has not run yet.
    pub fn pending_search(&self) -> Option<&str> {
        self.pending_search.as_deref()
    }

    fn run_pending_search(&mut self, appended: usize) -> bool {
        if appended == 0 && self.input_source.is_live() {
            return false;
        }
        let Some(term) = self.pending_search.take() else {
            return false;
        };
        self.log_view.new_search(&term, &self.store);
        // No match yet in a live stream: try again when more lines arrive.
        if !self.log_view.search_highlight() && self.input_source.is_live() {
            self.pending_search = Some(term);
        }
        true
    }

    /// Poll the input source, store notices and the filter task.
    ///
    /// Returns true when something changed that the redraw latch does not
    /// cover (a deferred search, filter completion, end of live input).
    pub fn tick(&mut self, now: Instant) -> Result<bool, TuiError> {
        let appended = self.input_source.drain_into(&mut self.store)?;
        self.log_view.poll_store(&self.store, now);
        let searched = self.run_pending_search(appended);

        let filter_done = matches!(
            self.log_view.filter_logs(now),
            FilterProgress::Completed { .. }
        );

        let live = self.input_source.is_live();
        let live_changed = live != self.live;
        if live_changed {
            info!(records = self.store.total_count(), "input finished");
        }
        self.live = live;

        Ok(searched || filter_done || live_changed)
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even mid-prompt
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if let Some(prompt) = self.prompt.take() {
            self.handle_prompt_key(prompt, key);
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        let store = &self.store;
        let view = &mut self.log_view;
        match action {
            KeyAction::Quit => return true,

            KeyAction::ScrollUp => view.scroll_up(1, store),
            KeyAction::ScrollDown => view.scroll_down(1, store),
            KeyAction::PageUp => view.scroll_up_one_page(store),
            KeyAction::PageDown => view.scroll_down_one_page(store),
            KeyAction::ScrollToTop => view.scroll_to_top(),
            KeyAction::ScrollToBottom => view.scroll_to_bottom(store),
            KeyAction::ScrollLeft => view.scroll_left(HORIZONTAL_SCROLL_STEP),
            KeyAction::ScrollRight => view.scroll_right(HORIZONTAL_SCROLL_STEP),

            KeyAction::ToggleFollow => view.toggle_follow(store),
            KeyAction::ToggleWrap => view.toggle_wrap(),
            KeyAction::ToggleTableView => view.toggle_table_view(),

            KeyAction::StartSearch => self.prompt = Some(Prompt::open(PromptKind::Search)),
            KeyAction::StartFilter => self.prompt = Some(Prompt::open(PromptKind::Filter)),
            KeyAction::SearchForward => view.search_forward(store),
            KeyAction::SearchBackward => view.search_backward(store),
            KeyAction::ClearHighlight => view.disable_search_highlighting(),
        }

        false
    }

    /// Route a key to the open prompt. The prompt stays open unless the key
    /// submits or cancels it.
    fn handle_prompt_key(&mut self, prompt: Prompt, key: KeyEvent) {
        let prompt = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                handle_char_input(prompt, ch)
            }
            KeyCode::Backspace => handle_backspace(prompt),
            KeyCode::Left => handle_cursor_left(prompt),
            KeyCode::Right => handle_cursor_right(prompt),
            KeyCode::Esc => return,
            KeyCode::Enter => {
                match submit(prompt) {
                    PromptOutcome::Submitted {
                        kind: PromptKind::Search,
                        text,
                    } => self.log_view.new_search(&text, &self.store),
                    PromptOutcome::Submitted {
                        kind: PromptKind::Filter,
                        text,
                    } => self.log_view.apply_filter(Some(&text), Instant::now()),
                    PromptOutcome::Cancelled => {}
                }
                return;
            }
            _ => prompt,
        };
        self.prompt = Some(prompt);
    }

    /// Handle a single mouse event
    ///
    /// Wheel scrolls the selection; a left click in the pane selects the
    /// record under the pointer.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.log_view.scroll_up(MOUSE_SCROLL_LINES, &self.store);
            }
            MouseEventKind::ScrollDown => {
                self.log_view.scroll_down(MOUSE_SCROLL_LINES, &self.store);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(area) = self.pane_area else {
                    return;
                };
                if mouse.row < area.y || mouse.column < area.x {
                    return;
                }
                let y = usize::from(mouse.row - area.y);
                let column = usize::from(mouse.column - area.x);
                if let Some(block) = self.pane_layout.block_at(y) {
                    self.log_view
                        .scroll_to_point(CursorPoint::new(column, block), &self.store);
                }
            }
            _ => {}
        }
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let width = if size.width > 0 { size.width } else { FALLBACK_WIDTH };
        let screen = Rect::new(0, 0, width, size.height);
        let areas = layout::split_screen(screen, self.log_view.table_view());

        let pane_width = usize::from(areas.pane.width);
        let pane_height = usize::from(areas.pane.height);
        self.log_view.set_viewport(pane_width, pane_height);

        let lines = self.log_view.render_content(&self.store).lines();
        let cursor = self.log_view.cursor_position();
        let geometry = PaneGeometry {
            width: pane_width,
            height: pane_height,
            wrap: self.log_view.wrap_lines(),
            prefix_width: self.log_view.line_wrap_prefix_width(&self.store),
            horizontal_scroll: self.log_view.horizontal_scroll(),
        };
        self.pane_layout = PaneLayout::build(&lines, geometry, cursor.row);
        self.pane_area = Some(areas.pane);

        let header = areas.header.map(|area| {
            let header_line = FrameLine {
                block: 0,
                record: None,
                segments: self.log_view.render_table_header(&self.store),
            };
            let cut = PaneGeometry {
                wrap: false,
                height: 1,
                ..geometry
            };
            let segments = log_pane::terminal_rows(&[header_line], cut)
                .into_iter()
                .next()
                .map(|row| row.segments)
                .unwrap_or_default();
            let spans: Vec<Span> = segments
                .into_iter()
                .map(|s| {
                    let style = self.styles.segment_style(&s);
                    Span::styled(s.text, style)
                })
                .collect();
            (area, Line::from(spans))
        });

        let status = match &self.prompt {
            Some(prompt) => StatusBar::Prompt(prompt),
            None => StatusBar::Info(StatusInfo {
                selected: self.log_view.current_line(),
                total: self.store.total_count(),
                follow: self.log_view.follow(),
                wrap: self.log_view.wrap_lines(),
                table_view: self.log_view.table_view(),
                live: self.live,
                search_term: self.log_view.search_term(),
                filter_term: self.log_view.filter_term(),
                filter_pending: self.log_view.filter_pending(),
            }),
        };
        let pane = LogPaneWidget::new(&self.pane_layout, &self.styles);

        self.terminal.draw(|frame| {
            if let Some((area, line)) = header {
                frame.render_widget(Paragraph::new(line), area);
            }
            frame.render_widget(pane, areas.pane);
            frame.render_widget(status, areas.status);
        })?;

        Ok(())
    }
}

/// Initialize and run the TUI application with input source and options
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit. `initial_search` is submitted after the initial load.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(
    input_source: InputSource,
    options: LogViewOptions,
    initial_search: Option<&str>,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(input_source, options)?;
    if let Some(term) = initial_search {
        app.search(term);
    }

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    restore_terminal()?;
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
