//! Selection and follow-mode state for one log view.
//!
//! Every operation takes the store's `last_index` (`None` for an empty store)
//! rather than the store itself, so the state stays a plain value that tests
//! can drive without records.

use crate::view_state::types::{Viewport, WindowRange};
use crate::view_state::visible_range::compute_window;
use tracing::debug;

/// Selected record, follow flag and viewport size.
///
/// # Invariants
/// - `selected <= last_index` whenever the store is non-empty
/// - `selected == 0` when the store is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    selected: usize,
    follow: bool,
    viewport: Viewport,
    current_range: WindowRange,
    last_range: WindowRange,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ScrollState {
    /// Create state with selection at 0.
    pub fn new(follow: bool) -> Self {
        Self {
            selected: 0,
            follow,
            viewport: Viewport::default(),
            current_range: WindowRange::default(),
            last_range: WindowRange::default(),
        }
    }

    /// Index of the selected record.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the selection tracks the newest record.
    pub fn follow(&self) -> bool {
        self.follow
    }

    /// Current viewport size.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Window computed by the most recent render pass.
    pub fn current_range(&self) -> WindowRange {
        self.current_range
    }

    /// Window computed by the pass before that.
    pub fn last_range(&self) -> WindowRange {
        self.last_range
    }

    // ===== Mutators =====

    /// Move the selection by `delta` records, saturating at both ends.
    ///
    /// Always turns follow off, even for a delta of 0.
    pub fn scroll(&mut self, delta: isize, last_index: Option<usize>) {
        self.follow = false;
        let Some(last) = last_index else {
            self.selected = 0;
            return;
        };

        let target = if delta < 0 {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            self.selected.saturating_add(delta.unsigned_abs())
        };
        self.selected = target.min(last);
        debug!(delta, selected = self.selected, "scrolled");
    }

    /// Select the first record and turn follow off.
    pub fn scroll_to_top(&mut self) {
        self.selected = 0;
        self.follow = false;
    }

    /// Select the newest record. Follow is left as it was.
    pub fn scroll_to_bottom(&mut self, last_index: Option<usize>) {
        self.selected = last_index.unwrap_or(0);
    }

    /// Flip follow mode; turning it on jumps to the newest record.
    pub fn toggle_follow(&mut self, last_index: Option<usize>) {
        self.follow = !self.follow;
        if self.follow {
            self.scroll_to_bottom(last_index);
        }
        debug!(follow = self.follow, "toggled follow");
    }

    /// Jump to the newest record when following.
    ///
    /// Returns true if a resync happened.
    pub fn resync(&mut self, last_index: Option<usize>) -> bool {
        if self.follow {
            self.scroll_to_bottom(last_index);
        }
        self.follow
    }

    /// Select `index` directly (search jumps). Turns follow off.
    pub fn select(&mut self, index: usize, last_index: Option<usize>) {
        self.follow = false;
        self.selected = last_index.map_or(0, |last| index.min(last));
    }

    /// Record the viewport size for the next render pass.
    pub fn set_viewport(&mut self, width: usize, height: usize) {
        self.viewport = Viewport::new(width, height);
    }

    /// Signed delta for one page: the viewport height, or 1 when unknown.
    pub fn page_delta(&self) -> isize {
        isize::try_from(self.viewport.page_rows()).unwrap_or(isize::MAX)
    }

    /// Compute the render window for the current selection and remember it.
    ///
    /// Returns `None` for an empty store.
    pub fn update_window(&mut self, last_index: Option<usize>) -> Option<WindowRange> {
        let last = last_index?;
        let range = compute_window(self.selected.min(last), self.viewport.height, last);
        self.last_range = self.current_range;
        self.current_range = range;
        Some(range)
    }
}
