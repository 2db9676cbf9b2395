//! Layout and timing constants for the terminal shell.

use std::time::Duration;

/// Height of the table header row when table view is on.
pub const TABLE_HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for position, mode flags, and the search/filter prompt.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Columns moved per horizontal scroll keypress.
pub const HORIZONTAL_SCROLL_STEP: usize = 4;

/// Records moved per mouse wheel notch.
pub const MOUSE_SCROLL_LINES: usize = 3;

/// How long the event loop waits for terminal input before polling the
/// input source.
pub const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Fallback terminal width when the backend reports zero.
pub const FALLBACK_WIDTH: u16 = 80;
