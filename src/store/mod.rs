//! Append-only log record store.
//!
//! The store owns every record and never mutates or removes one. Viewers
//! register a channel and receive a [`StoreNotice`] per appended record; they
//! drain it on their own schedule.

pub mod table;

pub use table::TableFormatter;

use crate::model::styled::StyledSegment;
use crate::model::LogRecord;
use crate::text::display_width;
use chrono::{DateTime, Local};
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::Level;

/// Notification pushed to registered viewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreNotice {
    /// A record was appended at `index`.
    Appended {
        /// Index of the new record.
        index: usize,
    },
}

/// Append-only, indexed record store.
#[derive(Debug, Default)]
pub struct LogStore {
    records: Vec<LogRecord>,
    longest_channel_width: usize,
    table: TableFormatter,
    viewers: Vec<Sender<StoreNotice>>,
}

impl LogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and notify viewers.
    ///
    /// Returns the new record's index.
    pub fn append(
        &mut self,
        timestamp: DateTime<Local>,
        level: Level,
        channel: impl Into<String>,
        message: impl Into<String>,
    ) -> usize {
        let index = self.records.len();
        let record = LogRecord::new(index, timestamp, level, channel, message);

        self.longest_channel_width = self.longest_channel_width.max(display_width(record.channel()));
        self.table.observe(&record);
        self.records.push(record);

        // Drop viewers whose receiving end has gone away.
        self.viewers
            .retain(|viewer| viewer.send(StoreNotice::Appended { index }).is_ok());

        index
    }

    /// Register a viewer for new-record notifications.
    pub fn register_viewer(&mut self) -> Receiver<StoreNotice> {
        let (tx, rx) = mpsc::channel();
        self.viewers.push(tx);
        rx
    }

    /// Number of registered viewers still listening.
    pub fn viewer_count(&self) -> usize {
        self.viewers.len()
    }

    /// Number of records.
    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    /// Check if the store has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the newest record, or `None` when empty.
    pub fn last_index(&self) -> Option<usize> {
        self.records.len().checked_sub(1)
    }

    /// Record at `index`, if present.
    pub fn record(&self, index: usize) -> Option<&LogRecord> {
        self.records.get(index)
    }

    /// Iterate over all records, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogRecord> {
        self.records.iter()
    }

    /// Width of the channel prefix in the plain view (channel + separator).
    ///
    /// Zero for an empty store.
    pub fn longest_channel_prefix_width(&self) -> usize {
        if self.records.is_empty() {
            0
        } else {
            self.longest_channel_width + crate::model::record::CHANNEL_SEPARATOR.len()
        }
    }

    /// Width of the channel column, without separator.
    pub fn longest_channel_width(&self) -> usize {
        self.longest_channel_width
    }

    /// Table formatter tracking current column widths.
    pub fn table(&self) -> &TableFormatter {
        &self.table
    }

    /// Pre-formatted table header.
    pub fn render_table_header(&self) -> Vec<StyledSegment> {
        self.table.header()
    }

    /// Styled rendering of `record` in table or plain view.
    pub fn render_record(&self, record: &LogRecord, table_view: bool) -> Vec<StyledSegment> {
        if table_view {
            self.table.formatted_row(record)
        } else {
            record.segments(self.longest_channel_width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::styled::segments_text;

    fn push(store: &mut LogStore, channel: &str, message: &str) -> usize {
        store.append(Local::now(), Level::INFO, channel, message)
    }

    #[test]
    fn empty_store_has_no_last_index() {
        let store = LogStore::new();
        assert_eq!(store.total_count(), 0);
        assert_eq!(store.last_index(), None);
        assert!(store.is_empty());
        assert_eq!(store.longest_channel_prefix_width(), 0);
    }

    #[test]
    fn append_assigns_dense_indices() {
        let mut store = LogStore::new();
        assert_eq!(push(&mut store, "a", "one"), 0);
        assert_eq!(push(&mut store, "a", "two"), 1);
        assert_eq!(store.last_index(), Some(1));
        assert_eq!(store.record(1).map(|r| r.plain_text()), Some("two"));
        assert_eq!(store.record(1).map(|r| r.index()), Some(1));
        assert!(store.record(2).is_none());
    }

    #[test]
    fn viewers_receive_one_notice_per_append() {
        let mut store = LogStore::new();
        let rx = store.register_viewer();

        push(&mut store, "a", "one");
        push(&mut store, "a", "two");

        let notices: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            notices,
            vec![
                StoreNotice::Appended { index: 0 },
                StoreNotice::Appended { index: 1 }
            ]
        );
    }

    #[test]
    fn dropped_viewers_are_pruned_on_append() {
        let mut store = LogStore::new();
        let rx = store.register_viewer();
        let _kept = store.register_viewer();
        drop(rx);

        push(&mut store, "a", "one");

        assert_eq!(store.viewer_count(), 1);
    }

    #[test]
    fn channel_prefix_width_tracks_longest_channel() {
        let mut store = LogStore::new();
        push(&mut store, "io", "x");
        push(&mut store, "network", "y");
        push(&mut store, "db", "z");

        assert_eq!(store.longest_channel_width(), 7);
        assert_eq!(store.longest_channel_prefix_width(), 9);
    }

    #[test]
    fn plain_rendering_aligns_messages() {
        let mut store = LogStore::new();
        push(&mut store, "io", "first");
        push(&mut store, "network", "second");

        let first = store.record(0).map(|r| segments_text(&store.render_record(r, false)));
        assert_eq!(first.as_deref(), Some("io       first"));
    }
}
