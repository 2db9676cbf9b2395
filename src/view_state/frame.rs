//! Rendered frame: ordered blocks plus cursor lookup.
//!
//! A frame is rebuilt on every render pass. Each block is either one record
//! or a run of blank rows; blocks are stored top to bottom.

use super::types::CursorPoint;
use crate::model::styled::{StyleTag, StyledSegment};

// ===== FrameBlock =====

/// One block of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBlock {
    /// Record index, or `None` for blank rows.
    pub record: Option<usize>,
    /// Terminal rows this block was budgeted.
    pub rows: usize,
    /// Styled content. Blank blocks hold at most an empty cursor marker.
    pub segments: Vec<StyledSegment>,
}

impl FrameBlock {
    /// Block holding one record.
    pub fn record(index: usize, rows: usize, segments: Vec<StyledSegment>) -> Self {
        Self {
            record: Some(index),
            rows,
            segments,
        }
    }

    /// Blank padding of `rows` rows.
    pub fn blank(rows: usize) -> Self {
        Self {
            record: None,
            rows,
            segments: Vec::new(),
        }
    }

    /// Blank block carrying the cursor marker, used when there is no data.
    pub fn cursor_placeholder(rows: usize) -> Self {
        Self {
            record: None,
            rows,
            segments: vec![StyledSegment::raw("").with_tag(StyleTag::Cursor)],
        }
    }

    /// Check whether any segment carries the cursor marker.
    pub fn has_cursor(&self) -> bool {
        self.segments.iter().any(|s| s.has_tag(StyleTag::Cursor))
    }
}

// ===== FrameLine =====

/// One logical line of a frame, before wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLine {
    /// Index of the block this line came from.
    pub block: usize,
    /// Record index, or `None` for blank rows.
    pub record: Option<usize>,
    /// Segments on this line; never contains `\n`.
    pub segments: Vec<StyledSegment>,
}

// ===== RenderFrame =====

/// The blocks produced by one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    blocks: Vec<FrameBlock>,
}

impl RenderFrame {
    /// Frame from blocks ordered top to bottom.
    pub fn new(blocks: Vec<FrameBlock>) -> Self {
        Self { blocks }
    }

    /// Blocks, top to bottom.
    pub fn blocks(&self) -> &[FrameBlock] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the frame has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Sum of the rows budgeted for every block.
    pub fn total_rows(&self) -> usize {
        self.blocks.iter().map(|b| b.rows).sum()
    }

    /// Position of the cursor marker.
    ///
    /// Blocks are scanned top to bottom and segments left to right, counting
    /// chars. The row is the block index. The column is shifted by
    /// `horizontal_scroll`. Without a marker the result is `(0, 0)`.
    pub fn cursor_position(&self, horizontal_scroll: usize) -> CursorPoint {
        for (row, block) in self.blocks.iter().enumerate() {
            let mut column = 0;
            for segment in &block.segments {
                if segment.has_tag(StyleTag::Cursor) {
                    return CursorPoint::new(column + horizontal_scroll, row);
                }
                column += segment.char_count();
            }
        }
        CursorPoint::default()
    }

    /// Flatten blocks into logical lines.
    ///
    /// Record blocks are split on `\n`. Blank blocks yield `rows` empty lines;
    /// a placeholder's cursor marker stays on its first line.
    pub fn lines(&self) -> Vec<FrameLine> {
        let mut lines = Vec::with_capacity(self.total_rows());
        for (block_index, block) in self.blocks.iter().enumerate() {
            if block.record.is_none() {
                for row in 0..block.rows {
                    let segments = if row == 0 { block.segments.clone() } else { Vec::new() };
                    lines.push(FrameLine {
                        block: block_index,
                        record: None,
                        segments,
                    });
                }
                continue;
            }

            let mut current: Vec<StyledSegment> = Vec::new();
            for segment in &block.segments {
                let mut parts = segment.text.split('\n').peekable();
                while let Some(part) = parts.next() {
                    if !part.is_empty() {
                        current.push(StyledSegment {
                            text: part.to_string(),
                            style: segment.style,
                            tags: segment.tags,
                        });
                    }
                    if parts.peek().is_some() {
                        lines.push(FrameLine {
                            block: block_index,
                            record: block.record,
                            segments: std::mem::take(&mut current),
                        });
                    }
                }
            }
            lines.push(FrameLine {
                block: block_index,
                record: block.record,
                segments: current,
            });
        }
        lines
    }
}
