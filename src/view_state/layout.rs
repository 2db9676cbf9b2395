//! Per-record row counting and bottom-up row budgeting.

use crate::text::{display_width, wrap_height};

/// Terminal rows one record occupies and the free columns on its last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    /// Occupied rows, embedded line breaks included.
    pub rows: usize,
    /// Free columns on the last wrapped row. Zero unless the record wrapped.
    pub leftover_width: usize,
}

/// Lay out one record from its rendered text.
///
/// Without wrapping, or when the content fits, a record takes one row per
/// embedded line. Otherwise the wrapped row count from [`wrap_height`] is
/// used, plus one row per embedded line break.
pub fn record_layout(
    rendered: &str,
    line_breaks: usize,
    viewport_width: usize,
    wrap: bool,
    prefix_width: usize,
) -> RowLayout {
    let (rows, leftover_width) = if wrap && display_width(rendered) > viewport_width {
        wrap_height(rendered, viewport_width, prefix_width)
    } else {
        (1, 0)
    };

    RowLayout {
        rows: rows + line_breaks,
        leftover_width,
    }
}

/// Running row total while records are added from the bottom of the window.
///
/// The budget is checked before each record is added, so the total can end
/// up to one record's rows past the viewport height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBudget {
    height: usize,
    used: usize,
}

impl RowBudget {
    /// Budget for a viewport of `height` rows.
    pub fn new(height: usize) -> Self {
        Self { height, used: 0 }
    }

    /// True once the running total has passed the viewport height.
    pub fn is_exhausted(&self) -> bool {
        self.used > self.height
    }

    /// Add one record's rows.
    pub fn add(&mut self, rows: usize) {
        self.used += rows;
    }

    /// Rows used so far.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Blank rows needed above the content to pin it to the bottom.
    pub fn padding_rows(&self) -> usize {
        self.height.saturating_sub(self.used)
    }
}
