//! Table-mode formatting for log records.
//!
//! Columns: `Time`, `Lvl`, `Channel`, `Message`, separated by two spaces.
//! The channel column grows to fit the longest channel seen so far.

use crate::model::record::{channel_style, level_style};
use crate::model::styled::{StyleTag, StyledSegment};
use crate::model::LogRecord;
use crate::text::{display_width, pad_to_width};
use ratatui::style::{Color, Modifier, Style};

const COLUMN_SEPARATOR: &str = "  ";
const TIME_FORMAT: &str = "%H:%M:%S";
const TIME_WIDTH: usize = 8;
const LEVEL_WIDTH: usize = 5;
const CHANNEL_HEADER: &str = "Channel";

/// Column-width tracking and row formatting for table view.
#[derive(Debug, Clone, Default)]
pub struct TableFormatter {
    channel_width: usize,
}

impl TableFormatter {
    /// Widen columns to fit `record`.
    pub fn observe(&mut self, record: &LogRecord) {
        self.channel_width = self.channel_width.max(display_width(record.channel()));
    }

    fn channel_column_width(&self) -> usize {
        self.channel_width.max(CHANNEL_HEADER.len())
    }

    /// Width of every column before `Message`, separators included.
    ///
    /// Wrapped continuation rows are indented by this much in table view.
    pub fn column_width_prefix_total(&self) -> usize {
        TIME_WIDTH
            + COLUMN_SEPARATOR.len()
            + LEVEL_WIDTH
            + COLUMN_SEPARATOR.len()
            + self.channel_column_width()
            + COLUMN_SEPARATOR.len()
    }

    /// Header row.
    pub fn header(&self) -> Vec<StyledSegment> {
        let style = Style::default().add_modifier(Modifier::BOLD);
        let text = format!(
            "{:<tw$}{sep}{:<lw$}{sep}{:<cw$}{sep}Message",
            "Time",
            "Lvl",
            CHANNEL_HEADER,
            tw = TIME_WIDTH,
            lw = LEVEL_WIDTH,
            cw = self.channel_column_width(),
            sep = COLUMN_SEPARATOR,
        );
        vec![StyledSegment::styled(text, style).with_tag(StyleTag::Header)]
    }

    /// One record as a table row.
    pub fn formatted_row(&self, record: &LogRecord) -> Vec<StyledSegment> {
        let time = record.timestamp().format(TIME_FORMAT).to_string();
        vec![
            StyledSegment::styled(
                format!("{:<tw$}{}", time, COLUMN_SEPARATOR, tw = TIME_WIDTH),
                Style::default().fg(Color::DarkGray),
            ),
            StyledSegment::styled(
                format!("{:<lw$}{}", record.level().as_str(), COLUMN_SEPARATOR, lw = LEVEL_WIDTH),
                level_style(record.level()),
            ),
            StyledSegment::styled(
                format!(
                    "{}{}",
                    pad_to_width(record.channel(), self.channel_column_width()),
                    COLUMN_SEPARATOR
                ),
                channel_style(),
            ),
            StyledSegment::styled(record.plain_text().to_string(), level_style(record.level())),
        ]
    }
}
