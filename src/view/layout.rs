//! Screen layout: optional table header, log pane, status bar.

use crate::view::constants::{STATUS_BAR_HEIGHT, TABLE_HEADER_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Table header row, present only in table view.
    pub header: Option<Rect>,
    /// Log pane.
    pub pane: Rect,
    /// Status bar or prompt.
    pub status: Rect,
}

/// Split `area` top to bottom.
pub fn split_screen(area: Rect, table_view: bool) -> ScreenAreas {
    let header_height = if table_view { TABLE_HEADER_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        header: table_view.then_some(chunks[0]),
        pane: chunks[1],
        status: chunks[2],
    }
}
