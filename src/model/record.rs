//! Log records held by the store.

use super::styled::StyledSegment;
use crate::text::pad_to_width;
use chrono::{DateTime, Local};
use ratatui::style::{Color, Modifier, Style};
use tracing::Level;

/// Separator between the channel prefix and the message in the plain view.
pub const CHANNEL_SEPARATOR: &str = "  ";

/// One appended log line.
///
/// Records are immutable once appended. The `index` is assigned by the store
/// and increases monotonically from 0.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    index: usize,
    timestamp: DateTime<Local>,
    level: Level,
    channel: String,
    message: String,
}

impl LogRecord {
    /// Create a record. Only the store should call this, so indices stay dense.
    pub fn new(
        index: usize,
        timestamp: DateTime<Local>,
        level: Level,
        channel: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            index,
            timestamp,
            level,
            channel: channel.into(),
            message: message.into(),
        }
    }

    /// Zero-based position in the store.
    pub fn index(&self) -> usize {
        self.index
    }

    /// When the record was appended.
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Severity.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Source channel (module, file name, `stdin`).
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Style-free text used for search and measurement.
    pub fn plain_text(&self) -> &str {
        &self.message
    }

    /// Number of embedded line breaks in the plain text.
    pub fn line_break_count(&self) -> usize {
        self.message.matches('\n').count()
    }

    /// Styled rendering for the plain (non-table) view.
    ///
    /// The channel is padded to `channel_width` so messages line up, then the
    /// message follows in the level color.
    pub fn segments(&self, channel_width: usize) -> Vec<StyledSegment> {
        vec![
            StyledSegment::styled(
                format!("{}{}", pad_to_width(&self.channel, channel_width), CHANNEL_SEPARATOR),
                channel_style(),
            ),
            StyledSegment::styled(self.message.clone(), level_style(self.level)),
        ]
    }
}

/// Visual style for a level.
pub fn level_style(level: Level) -> Style {
    match level {
        Level::ERROR => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Level::WARN => Style::default().fg(Color::Yellow),
        Level::INFO => Style::default(),
        Level::DEBUG => Style::default().fg(Color::Gray),
        Level::TRACE => Style::default().fg(Color::DarkGray),
    }
}

/// Visual style for channel prefixes.
pub fn channel_style() -> Style {
    Style::default().fg(Color::Cyan)
}
