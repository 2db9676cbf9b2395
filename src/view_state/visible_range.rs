//! Window calculation: which record indices to attempt to render.

use super::types::WindowRange;
use tracing::trace;

/// Compute the inclusive window of record indices around `selected`.
///
/// The window is anchored so the selection sits on the bottom row:
///
/// - height 0: `[0, selected]`
/// - otherwise, with `max_row = height - 1`:
///   `start = max(0, selected - max_row)`, `end = max(selected, max_row)`
///
/// Near the top of the data `end` extends to `max_row` even when the
/// selection is above it, so the window always tries to span a full viewport
/// from 0. `end` is finally clamped to `last_index`.
pub fn compute_window(selected: usize, viewport_height: usize, last_index: usize) -> WindowRange {
    let (start, end) = if viewport_height == 0 {
        (0, selected)
    } else {
        let max_row = viewport_height - 1;
        (selected.saturating_sub(max_row), selected.max(max_row))
    };

    let end = end.min(last_index);
    trace!(selected, viewport_height, last_index, start, end, "computed log window");

    WindowRange::new(start.min(end), end)
}
