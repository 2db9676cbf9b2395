//! LogView: the per-pane facade over scroll, search, filter and rendering.
//!
//! The view never owns the store. Every operation that reads records takes
//! `&LogStore`. Redraw requests are latched: search jumps set the latch
//! directly, new records set it through a [`RedrawThrottle`]. The owner
//! polls [`LogView::take_redraw_request`] once per loop turn.

use super::filter::{FilterProgress, FilterState};
use super::redraw::RedrawThrottle;
use super::scroll::ScrollState;
use super::search::{find_backward, find_forward, LiteralMatcher, SearchState};
use crate::config::ResolvedConfig;
use crate::model::styled::StyledSegment;
use crate::store::{LogStore, StoreNotice};
use crate::view_state::frame::RenderFrame;
use crate::view_state::renderer::{render_frame, RenderContext};
use crate::view_state::types::CursorPoint;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Initial pane settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogViewOptions {
    /// Start following new records.
    pub follow: bool,
    /// Wrap long records.
    pub line_wrap: bool,
    /// Start in table view.
    pub table_view: bool,
    /// Minimum interval between follow-triggered redraws.
    pub redraw_interval: Duration,
    /// Delay before a filter task completes.
    pub filter_delay: Duration,
}

impl Default for LogViewOptions {
    fn default() -> Self {
        Self::from(&ResolvedConfig::default())
    }
}

impl From<&ResolvedConfig> for LogViewOptions {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            follow: config.follow,
            line_wrap: config.line_wrap,
            table_view: config.table_view,
            redraw_interval: config.redraw_interval(),
            filter_delay: config.filter_delay(),
        }
    }
}

/// Scroll, search and render state for one log pane.
#[derive(Debug)]
pub struct LogView {
    scroll: ScrollState,
    search: SearchState,
    filter: FilterState,
    throttle: RedrawThrottle,
    frame: RenderFrame,
    notices: Option<Receiver<StoreNotice>>,
    wrap_lines: bool,
    table_view: bool,
    horizontal_scroll: usize,
    redraw_requested: bool,
}

impl LogView {
    /// Create a view that is not yet registered with a store.
    pub fn new(options: LogViewOptions) -> Self {
        Self {
            scroll: ScrollState::new(options.follow),
            search: SearchState::new(),
            filter: FilterState::new(options.filter_delay),
            throttle: RedrawThrottle::new(options.redraw_interval),
            frame: RenderFrame::default(),
            notices: None,
            wrap_lines: options.line_wrap,
            table_view: options.table_view,
            horizontal_scroll: 0,
            redraw_requested: false,
        }
    }

    /// Register with `store` for new-record notifications.
    pub fn attach(&mut self, store: &mut LogStore) {
        self.notices = Some(store.register_viewer());
    }

    // ===== Accessors =====

    /// Index of the selected record.
    pub fn current_line(&self) -> usize {
        self.scroll.selected()
    }

    /// Number of records in `store`.
    pub fn total_count(&self, store: &LogStore) -> usize {
        store.total_count()
    }

    /// Whether the selection tracks the newest record.
    pub fn follow(&self) -> bool {
        self.scroll.follow()
    }

    /// Scroll state, for inspection.
    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    /// Whether long records wrap.
    pub fn wrap_lines(&self) -> bool {
        self.wrap_lines
    }

    /// Whether records render as table rows.
    pub fn table_view(&self) -> bool {
        self.table_view
    }

    /// Horizontal scroll offset in columns.
    pub fn horizontal_scroll(&self) -> usize {
        self.horizontal_scroll
    }

    /// Active search term, if any.
    pub fn search_term(&self) -> Option<&str> {
        self.search.term()
    }

    /// Whether search matches are highlighted.
    pub fn search_highlight(&self) -> bool {
        self.search.highlight()
    }

    /// Active filter term, if any.
    pub fn filter_term(&self) -> Option<&str> {
        self.filter.term()
    }

    /// Whether a filter task is pending.
    pub fn filter_pending(&self) -> bool {
        self.filter.pending().is_some()
    }

    /// Frame from the last render pass.
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    /// Indentation for wrapped continuation rows.
    ///
    /// Table view indents to the message column, plain view to the end of the
    /// channel prefix. Zero when not wrapping.
    pub fn line_wrap_prefix_width(&self, store: &LogStore) -> usize {
        if !self.wrap_lines {
            0
        } else if self.table_view {
            store.table().column_width_prefix_total()
        } else {
            store.longest_channel_prefix_width()
        }
    }

    // ===== Scrolling =====

    /// Move the selection by `delta` records. Turns follow off.
    pub fn scroll(&mut self, delta: isize, store: &LogStore) {
        self.scroll.scroll(delta, store.last_index());
    }

    /// Move the selection up `lines` records.
    pub fn scroll_up(&mut self, lines: usize, store: &LogStore) {
        self.scroll(-to_delta(lines), store);
    }

    /// Move the selection down `lines` records.
    pub fn scroll_down(&mut self, lines: usize, store: &LogStore) {
        self.scroll(to_delta(lines), store);
    }

    /// Move the selection up one viewport height.
    pub fn scroll_up_one_page(&mut self, store: &LogStore) {
        let page = self.scroll.page_delta();
        self.scroll(-page, store);
    }

    /// Move the selection down one viewport height.
    pub fn scroll_down_one_page(&mut self, store: &LogStore) {
        let page = self.scroll.page_delta();
        self.scroll(page, store);
    }

    /// Select the first record and stop following.
    pub fn scroll_to_top(&mut self) {
        self.scroll.scroll_to_top();
    }

    /// Select the newest record. Follow is unchanged.
    pub fn scroll_to_bottom(&mut self, store: &LogStore) {
        self.scroll.scroll_to_bottom(store.last_index());
    }

    /// Flip follow mode; turning it on jumps to the newest record.
    pub fn toggle_follow(&mut self, store: &LogStore) {
        self.scroll.toggle_follow(store.last_index());
    }

    /// Record the pane size for the next render pass.
    pub fn set_viewport(&mut self, width: usize, height: usize) {
        self.scroll.set_viewport(width, height);
    }

    /// Scroll left `columns`. No-op while wrapping.
    pub fn scroll_left(&mut self, columns: usize) {
        if !self.wrap_lines {
            self.horizontal_scroll = self.horizontal_scroll.saturating_sub(columns);
        }
    }

    /// Scroll right `columns`. No-op while wrapping.
    pub fn scroll_right(&mut self, columns: usize) {
        if !self.wrap_lines {
            self.horizontal_scroll = self.horizontal_scroll.saturating_add(columns);
        }
    }

    /// Toggle wrapping. Enabling it resets horizontal scroll.
    pub fn toggle_wrap(&mut self) {
        self.wrap_lines = !self.wrap_lines;
        if self.wrap_lines {
            self.horizontal_scroll = 0;
        }
        debug!(wrap = self.wrap_lines, "toggled wrap");
    }

    /// Toggle table view.
    pub fn toggle_table_view(&mut self) {
        self.table_view = !self.table_view;
        debug!(table = self.table_view, "toggled table view");
    }

    /// Select the record under a clicked point.
    ///
    /// Both rows are frame block indices. Ignored while following.
    pub fn scroll_to_point(&mut self, point: CursorPoint, store: &LogStore) {
        if self.scroll.follow() {
            return;
        }
        let cursor = self.cursor_position();
        let delta = to_delta(point.row) - to_delta(cursor.row);
        self.scroll(delta, store);
    }

    // ===== Search =====

    /// Set a new search term and jump backward to the nearest match.
    ///
    /// An empty term clears the search.
    pub fn new_search(&mut self, term: &str, store: &LogStore) {
        if let Err(err) = self.search.set_term(term) {
            warn!(error = %err, "keeping previous search term");
            return;
        }
        if !self.search.is_active() {
            self.search.set_highlight(false);
            return;
        }
        self.search_backward(store);
    }

    /// Jump to the next match below the selection, wrapping to the top.
    pub fn search_forward(&mut self, store: &LogStore) {
        let Some(matcher) = self.search.matcher() else {
            return;
        };
        let found = find_forward(store, matcher, self.scroll.selected());
        self.jump_to_match(found, store);
    }

    /// Jump to the next match above the selection, wrapping to the bottom.
    pub fn search_backward(&mut self, store: &LogStore) {
        let Some(matcher) = self.search.matcher() else {
            return;
        };
        let found = find_backward(store, matcher, self.scroll.selected());
        self.jump_to_match(found, store);
    }

    fn jump_to_match(&mut self, found: Option<usize>, store: &LogStore) {
        if let Some(index) = found {
            self.scroll.select(index, store.last_index());
            self.search.set_highlight(true);
            self.redraw_requested = true;
        }
    }

    /// Stop highlighting matches. The term stays active.
    pub fn disable_search_highlighting(&mut self) {
        self.search.set_highlight(false);
    }

    // ===== Filter =====

    /// Set a filter term and schedule recomputation.
    ///
    /// `None` or an empty term reuses the active search term; with no search
    /// term either this is a no-op. The term also becomes the search term,
    /// with highlighting off.
    pub fn apply_filter(&mut self, text: Option<&str>, now: Instant) {
        let term = match text.filter(|t| !t.is_empty()) {
            Some(text) => text.to_string(),
            None => match self.search.term() {
                Some(term) => term.to_string(),
                None => return,
            },
        };

        let matcher = match LiteralMatcher::new(&term) {
            Ok(matcher) => matcher,
            Err(err) => {
                warn!(error = %err, "keeping previous filter");
                return;
            }
        };
        if let Err(err) = self.search.set_term(&term) {
            warn!(error = %err, "keeping previous search term");
        }
        self.search.set_highlight(false);
        self.filter.start(matcher, now);
    }

    /// Advance the pending filter task.
    pub fn filter_logs(&mut self, now: Instant) -> FilterProgress {
        self.filter.poll(now)
    }

    // ===== Store notifications =====

    /// React to one appended record: resync when following, then request a
    /// throttled redraw.
    pub fn on_new_record(&mut self, store: &LogStore, now: Instant) {
        self.scroll.resync(store.last_index());
        if self.throttle.request(now) {
            self.redraw_requested = true;
        }
    }

    /// Drain pending store notices. Returns how many were handled.
    pub fn poll_store(&mut self, store: &LogStore, now: Instant) -> usize {
        let count = match &self.notices {
            Some(notices) => notices.try_iter().count(),
            None => 0,
        };
        for _ in 0..count {
            self.on_new_record(store, now);
        }
        count
    }

    /// Return and clear the redraw latch.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    // ===== Rendering =====

    /// Render the current window and cache it for cursor lookup.
    pub fn render_content(&mut self, store: &LogStore) -> &RenderFrame {
        let window = self.scroll.update_window(store.last_index());
        let ctx = RenderContext {
            store,
            selected: self.scroll.selected(),
            window,
            viewport: self.scroll.viewport(),
            wrap: self.wrap_lines,
            table_view: self.table_view,
            horizontal_scroll: self.horizontal_scroll,
            prefix_width: self.line_wrap_prefix_width(store),
            highlight: self.search.highlight_matcher(),
        };
        self.frame = render_frame(&ctx);
        &self.frame
    }

    /// Table header segments.
    pub fn render_table_header(&self, store: &LogStore) -> Vec<StyledSegment> {
        store.render_table_header()
    }

    /// Cursor position in the last rendered frame.
    pub fn cursor_position(&self) -> CursorPoint {
        self.frame.cursor_position(self.horizontal_scroll)
    }
}

fn to_delta(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

#[cfg(test)]
#[path = "log_view_tests.rs"]
mod tests;
