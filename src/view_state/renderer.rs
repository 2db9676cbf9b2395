//! Render pipeline: window of records to a [`RenderFrame`].
//!
//! Records are laid out bottom-up from the end of the window. The row budget
//! is checked before each record is added, so the frame may run one record
//! past the viewport height. Any shortfall becomes blank rows at the top.

use super::frame::{FrameBlock, RenderFrame};
use super::layout::{record_layout, RowBudget};
use super::types::{Viewport, WindowRange};
use crate::model::styled::{overlay_tag, segments_text, StyleTag, StyledSegment};
use crate::state::search::LiteralMatcher;
use crate::store::LogStore;
use crate::text::{explode_segments, fill_character_width, merge_segments, segments_width};
use tracing::trace;

/// Everything one render pass reads.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Source records.
    pub store: &'a LogStore,
    /// Selected record index.
    pub selected: usize,
    /// Window to render; `None` for an empty store.
    pub window: Option<WindowRange>,
    /// Pane size.
    pub viewport: Viewport,
    /// Wrap long records.
    pub wrap: bool,
    /// Use table formatting.
    pub table_view: bool,
    /// Horizontal scroll offset when not wrapping.
    pub horizontal_scroll: usize,
    /// Indentation of wrapped continuation rows.
    pub prefix_width: usize,
    /// Matcher to highlight with, when highlighting is on.
    pub highlight: Option<&'a LiteralMatcher>,
}

/// Build the frame for one pass.
pub fn render_frame(ctx: &RenderContext<'_>) -> RenderFrame {
    let Some(window) = ctx.window else {
        return RenderFrame::new(vec![FrameBlock::cursor_placeholder(ctx.viewport.height)]);
    };

    let mut budget = RowBudget::new(ctx.viewport.height);
    let mut blocks = Vec::with_capacity(window.len() + 1);

    for index in window.bottom_up() {
        if budget.is_exhausted() {
            break;
        }
        let Some(record) = ctx.store.record(index) else {
            continue;
        };

        let mut segments = ctx.store.render_record(record, ctx.table_view);
        let content_width = segments_width(&segments);
        let layout = record_layout(
            &segments_text(&segments),
            record.line_break_count(),
            ctx.viewport.width,
            ctx.wrap,
            ctx.prefix_width,
        );

        let selected = index == ctx.selected;
        if selected {
            segments = fill_character_width(
                segments,
                content_width,
                ctx.viewport.width,
                layout.leftover_width,
                ctx.wrap,
                ctx.horizontal_scroll,
                true,
            );
            segments = overlay_tag(segments, StyleTag::Selected);
        }

        if let Some(matcher) = ctx.highlight {
            if matcher.is_match(record.plain_text()) {
                segments = highlight_matches(&segments, matcher, selected);
            }
        }

        blocks.push(FrameBlock::record(index, layout.rows, segments));
        budget.add(layout.rows);
    }

    let padding = budget.padding_rows();
    if padding > 0 {
        blocks.push(FrameBlock::blank(padding));
    }
    blocks.reverse();

    trace!(
        start = window.start,
        end = window.end,
        used = budget.used(),
        blocks = blocks.len(),
        "rendered frame"
    );
    RenderFrame::new(blocks)
}

/// Tag every char covered by a match of `matcher` in the rendered text.
///
/// The selected row gets [`StyleTag::SearchCurrent`], other rows
/// [`StyleTag::SearchOther`].
pub fn highlight_matches(
    segments: &[StyledSegment],
    matcher: &LiteralMatcher,
    selected: bool,
) -> Vec<StyledSegment> {
    let tag = if selected {
        StyleTag::SearchCurrent
    } else {
        StyleTag::SearchOther
    };
    let text = segments_text(segments);
    let mut spans = matcher.find_iter(&text).peekable();
    let mut exploded = explode_segments(segments);

    for (char_index, (byte_offset, _)) in text.char_indices().enumerate() {
        while spans.peek().is_some_and(|span| span.end <= byte_offset) {
            spans.next();
        }
        let Some(span) = spans.peek() else {
            break;
        };
        if span.contains(&byte_offset) {
            if let Some(segment) = exploded.get_mut(char_index) {
                segment.tags.insert(tag);
            }
        }
    }

    merge_segments(exploded)
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
