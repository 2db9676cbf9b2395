//! Log pane widget: turns a rendered frame into terminal rows.
//!
//! The frame is measured in blocks (one per record). This module breaks each
//! block's lines into terminal rows, applying wrapping or horizontal scroll,
//! then picks the rows that fit the pane so the cursor stays visible.

use crate::model::styled::{StyleTag, StyleTags, StyledSegment};
use crate::text::{breaks_before, continuation_indent, merge_segments};
use crate::view::styles::PaneStyles;
use crate::view_state::FrameLine;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

/// Pane dimensions and the flags that shape its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneGeometry {
    /// Pane width in columns.
    pub width: usize,
    /// Pane height in rows.
    pub height: usize,
    /// Wrap long lines instead of cutting them.
    pub wrap: bool,
    /// Indentation of wrapped continuation rows.
    pub prefix_width: usize,
    /// Columns skipped on the left when not wrapping.
    pub horizontal_scroll: usize,
}

/// One terminal row of the pane.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneRow {
    /// Frame block the row belongs to.
    pub block: usize,
    /// Segments on this row, already cut to the pane width.
    pub segments: Vec<StyledSegment>,
}

// ===== PaneLayout =====

/// The rows shown in the pane, bottom-aligned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaneLayout {
    rows: Vec<PaneRow>,
    top_padding: usize,
}

impl PaneLayout {
    /// Lay out `lines` and keep the rows that fit.
    ///
    /// When the content is taller than the pane, the bottom is shown unless
    /// that would push the first row of `cursor_block` off the top.
    pub fn build(lines: &[FrameLine], geometry: PaneGeometry, cursor_block: usize) -> Self {
        let all = terminal_rows(lines, geometry);
        let cursor_row = all
            .iter()
            .position(|row| row.block == cursor_block)
            .unwrap_or(0);
        let overflow = all.len().saturating_sub(geometry.height);
        let offset = overflow.min(cursor_row);

        let rows: Vec<PaneRow> = all.into_iter().skip(offset).take(geometry.height).collect();
        let top_padding = geometry.height.saturating_sub(rows.len());
        Self { rows, top_padding }
    }

    /// Visible rows, top to bottom.
    pub fn rows(&self) -> &[PaneRow] {
        &self.rows
    }

    /// Empty rows above the first visible row.
    pub fn top_padding(&self) -> usize {
        self.top_padding
    }

    /// Frame block shown at pane row `y`.
    pub fn block_at(&self, y: usize) -> Option<usize> {
        let index = y.checked_sub(self.top_padding)?;
        self.rows.get(index).map(|row| row.block)
    }
}

/// Break frame lines into terminal rows.
pub fn terminal_rows(lines: &[FrameLine], geometry: PaneGeometry) -> Vec<PaneRow> {
    let mut rows = Vec::with_capacity(lines.len());
    for line in lines {
        if geometry.wrap {
            wrap_line(line, geometry, &mut rows);
        } else {
            rows.push(PaneRow {
                block: line.block,
                segments: cut_line(line, geometry),
            });
        }
    }
    rows
}

fn chars_of(line: &FrameLine) -> impl Iterator<Item = (char, &StyledSegment)> {
    line.segments
        .iter()
        .flat_map(|segment| segment.text.chars().map(move |ch| (ch, segment)))
}

fn cell(ch: char, source: &StyledSegment) -> StyledSegment {
    StyledSegment {
        text: ch.to_string(),
        style: source.style,
        tags: source.tags,
    }
}

/// Tags for continuation indentation: selection carries over, nothing else.
fn indent_tags(line: &FrameLine) -> StyleTags {
    if line.segments.iter().any(|s| s.has_tag(StyleTag::Selected)) {
        StyleTags::only(StyleTag::Selected)
    } else {
        StyleTags::EMPTY
    }
}

fn wrap_line(line: &FrameLine, geometry: PaneGeometry, rows: &mut Vec<PaneRow>) {
    let width = geometry.width;
    let indent = continuation_indent(geometry.prefix_width, width);

    let mut current: Vec<StyledSegment> = Vec::new();
    let mut used = 0;
    for (ch, source) in chars_of(line) {
        let w = ch.width().unwrap_or(0);
        if breaks_before(used, w, width) {
            rows.push(PaneRow {
                block: line.block,
                segments: merge_segments(std::mem::take(&mut current)),
            });
            if indent > 0 {
                current.push(StyledSegment {
                    text: " ".repeat(indent),
                    style: Default::default(),
                    tags: indent_tags(line),
                });
            }
            used = indent;
        }
        current.push(cell(ch, source));
        used += w;
    }
    rows.push(PaneRow {
        block: line.block,
        segments: merge_segments(current),
    });
}

fn cut_line(line: &FrameLine, geometry: PaneGeometry) -> Vec<StyledSegment> {
    let start = geometry.horizontal_scroll;
    let end = start + geometry.width;
    let mut column = 0;
    let mut kept = Vec::new();
    for (ch, source) in chars_of(line) {
        let w = ch.width().unwrap_or(0);
        if column >= start && column + w <= end {
            kept.push(cell(ch, source));
        }
        column += w;
        if column >= end {
            break;
        }
    }
    merge_segments(kept)
}

// ===== LogPaneWidget =====

/// Draws a [`PaneLayout`].
pub struct LogPaneWidget<'a> {
    layout: &'a PaneLayout,
    styles: &'a PaneStyles,
}

impl<'a> LogPaneWidget<'a> {
    /// Widget over a computed layout.
    pub fn new(layout: &'a PaneLayout, styles: &'a PaneStyles) -> Self {
        Self { layout, styles }
    }
}

impl Widget for LogPaneWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let top = self.layout.top_padding();
        for (i, row) in self.layout.rows().iter().enumerate() {
            let Ok(offset) = u16::try_from(top + i) else {
                break;
            };
            if offset >= area.height {
                break;
            }
            let spans: Vec<Span> = row
                .segments
                .iter()
                .map(|s| Span::styled(s.text.as_str(), self.styles.segment_style(s)))
                .collect();
            buf.set_line(area.x, area.y + offset, &Line::from(spans), area.width);
        }
    }
}

#[cfg(test)]
#[path = "log_pane_tests.rs"]
mod tests;
