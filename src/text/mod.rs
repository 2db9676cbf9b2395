//! Display-width, wrapping and row-fill primitives.
//!
//! These helpers lay out a single row. They know nothing about the store or
//! the selection; the render pipeline composes them.

use crate::model::styled::{StyleTag, StyledSegment};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal display width of `text`, ignoring embedded line breaks.
///
/// Multi-line text is measured as if its lines were joined.
pub fn display_width(text: &str) -> usize {
    text.split('\n').map(UnicodeWidthStr::width).sum()
}

/// `text` followed by spaces up to `width` display columns.
///
/// Text already at least `width` wide is returned unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(pad))
}

/// Total display width of a segment list.
pub fn segments_width(segments: &[StyledSegment]) -> usize {
    segments.iter().map(|s| display_width(&s.text)).sum()
}

/// Indentation of continuation rows: a prefix as wide as the viewport (or
/// wider) is ignored.
pub fn continuation_indent(prefix_width: usize, viewport_width: usize) -> usize {
    if prefix_width < viewport_width {
        prefix_width
    } else {
        0
    }
}

/// Whether a char of `char_width` columns starts a new row when `used`
/// columns of a `row_width` row are taken.
///
/// A wide char never straddles the edge; it moves to the next row whole. The
/// first char of a row always stays, even when it is wider than the row.
pub fn breaks_before(used: usize, char_width: usize, row_width: usize) -> bool {
    used > 0 && used + char_width > row_width
}

/// Compute how many terminal rows `text` occupies when wrapped at
/// `viewport_width`, and how many columns are left free on its last row.
///
/// The first row holds `viewport_width` columns. Every continuation row is
/// indented by `prefix_width` columns (see [`continuation_indent`]). Chars
/// are placed one at a time by [`breaks_before`], so wide chars count the
/// same way the pane draws them. Embedded line breaks are skipped; the text
/// is measured as if its lines were joined.
///
/// # Returns
/// `(rows, leftover_width)`
pub fn wrap_height(text: &str, viewport_width: usize, prefix_width: usize) -> (usize, usize) {
    if viewport_width == 0 {
        return (1, 0);
    }
    let indent = continuation_indent(prefix_width, viewport_width);

    let mut rows = 1;
    let mut used = 0;
    for ch in text.chars().filter(|&ch| ch != '\n') {
        let w = ch.width().unwrap_or(0);
        if breaks_before(used, w, viewport_width) {
            rows += 1;
            used = indent;
        }
        used += w;
    }

    (rows, viewport_width.saturating_sub(used))
}

/// Pad a row with trailing spaces so its style reaches the viewport edge.
///
/// - Wrapped rows that overflowed the viewport are padded by `leftover_width`
///   (the free columns on their last row).
/// - Otherwise the row is padded by whatever remains of the viewport after the
///   visible part of the content (`content_width - horizontal_scroll` when not
///   wrapping).
///
/// With `add_cursor`, the first segment is tagged [`StyleTag::Cursor`] so the
/// cursor lands at the start of the row.
pub fn fill_character_width(
    mut segments: Vec<StyledSegment>,
    content_width: usize,
    viewport_width: usize,
    leftover_width: usize,
    wrap: bool,
    horizontal_scroll: usize,
    add_cursor: bool,
) -> Vec<StyledSegment> {
    let fill = if wrap && content_width > viewport_width {
        leftover_width
    } else {
        let visible = if wrap {
            content_width
        } else {
            content_width.saturating_sub(horizontal_scroll)
        };
        viewport_width.saturating_sub(visible)
    };

    if fill > 0 {
        segments.push(StyledSegment::raw(" ".repeat(fill)));
    }

    if add_cursor {
        match segments.first_mut() {
            Some(first) => first.tags.insert(StyleTag::Cursor),
            None => segments.push(StyledSegment::raw("").with_tag(StyleTag::Cursor)),
        }
    }

    segments
}

/// Split segments into one segment per char, preserving style and tags.
pub fn explode_segments(segments: &[StyledSegment]) -> Vec<StyledSegment> {
    segments
        .iter()
        .flat_map(|segment| {
            segment.text.chars().map(move |ch| StyledSegment {
                text: ch.to_string(),
                style: segment.style,
                tags: segment.tags,
            })
        })
        .collect()
}

/// Merge adjacent segments with identical style and tags.
pub fn merge_segments(segments: Vec<StyledSegment>) -> Vec<StyledSegment> {
    let mut merged: Vec<StyledSegment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match merged.last_mut() {
            Some(last) if last.style == segment.style && last.tags == segment.tags => {
                last.text.push_str(&segment.text);
            }
            _ => merged.push(segment),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::styled::segments_text;

    mod widths {
        use super::*;

        #[test]
        fn ascii_width_is_char_count() {
            assert_eq!(display_width("hello"), 5);
        }

        #[test]
        fn wide_chars_count_double() {
            assert_eq!(display_width("日本"), 4);
        }

        #[test]
        fn newlines_do_not_add_width() {
            assert_eq!(display_width("ab\ncd"), 4);
        }

        #[test]
        fn pad_counts_columns_not_chars() {
            assert_eq!(pad_to_width("ab", 4), "ab  ");
            assert_eq!(pad_to_width("日", 4), "日  ");
            assert_eq!(pad_to_width("日本語", 4), "日本語");
        }

        #[test]
        fn segments_width_sums_segments() {
            let segments = vec![StyledSegment::raw("abc"), StyledSegment::raw("de")];
            assert_eq!(segments_width(&segments), 5);
        }
    }

    mod wrap {
        use super::*;

        fn x(n: usize) -> String {
            "x".repeat(n)
        }

        #[test]
        fn fitting_line_takes_one_row() {
            assert_eq!(wrap_height(&x(10), 20, 0), (1, 10));
        }

        #[test]
        fn exact_fit_takes_one_row_with_no_leftover() {
            assert_eq!(wrap_height(&x(20), 20, 0), (1, 0));
        }

        #[test]
        fn overflow_without_prefix() {
            // 25 columns at width 10: 10 + 10 + 5, 5 columns free on the last row
            assert_eq!(wrap_height(&x(25), 10, 0), (3, 5));
        }

        #[test]
        fn overflow_exactly_two_rows() {
            assert_eq!(wrap_height(&x(20), 10, 0), (2, 0));
        }

        #[test]
        fn prefix_shrinks_continuation_rows() {
            // First row 10, continuation rows hold 10 - 4 = 6 each.
            // 22 = 10 + 6 + 6, leaving 0 free.
            assert_eq!(wrap_height(&x(22), 10, 4), (3, 0));
            // 23 needs a fourth row with 5 free columns.
            assert_eq!(wrap_height(&x(23), 10, 4), (4, 5));
        }

        #[test]
        fn prefix_wider_than_viewport_is_ignored() {
            assert_eq!(wrap_height(&x(25), 10, 10), wrap_height(&x(25), 10, 0));
            assert_eq!(wrap_height(&x(25), 10, 30), (3, 5));
        }

        #[test]
        fn zero_viewport_is_degenerate_single_row() {
            assert_eq!(wrap_height(&x(100), 0, 0), (1, 0));
        }

        #[test]
        fn wide_char_at_the_edge_moves_to_next_row() {
            // "abcd" fills 4 of 5; each 日 needs 2, so they go 1 + 2 per row.
            assert_eq!(wrap_height("abcd日日日", 5, 0), (3, 3));
        }

        #[test]
        fn wide_char_wider_than_row_still_takes_one_row() {
            assert_eq!(wrap_height("日", 1, 0), (1, 0));
        }

        #[test]
        fn line_breaks_are_skipped() {
            assert_eq!(wrap_height("ab\ncd", 10, 0), wrap_height("abcd", 10, 0));
        }
    }

    mod fill {
        use super::*;

        #[test]
        fn pads_short_row_to_viewport_width() {
            let filled = fill_character_width(vec![StyledSegment::raw("abc")], 3, 10, 0, false, 0, false);
            assert_eq!(segments_text(&filled), "abc       ");
        }

        #[test]
        fn wide_unwrapped_row_gets_no_padding() {
            let filled = fill_character_width(vec![StyledSegment::raw("abcdef")], 6, 4, 0, false, 0, false);
            assert_eq!(segments_text(&filled), "abcdef");
        }

        #[test]
        fn horizontal_scroll_reduces_visible_width() {
            // 12 columns scrolled by 8 leaves 4 visible, so 6 spaces fill a width of 10
            let filled = fill_character_width(vec![StyledSegment::raw("abcdefghijkl")], 12, 10, 0, false, 8, false);
            assert_eq!(segments_text(&filled).len(), 12 + 6);
        }

        #[test]
        fn wrapped_overflow_uses_leftover_width() {
            let filled = fill_character_width(vec![StyledSegment::raw("x".repeat(25))], 25, 10, 5, true, 0, false);
            assert_eq!(segments_text(&filled).len(), 30);
        }

        #[test]
        fn cursor_tag_goes_on_first_segment() {
            let filled = fill_character_width(
                vec![StyledSegment::raw("a"), StyledSegment::raw("b")],
                2,
                2,
                0,
                false,
                0,
                true,
            );
            assert!(filled[0].has_tag(StyleTag::Cursor));
            assert!(!filled[1].has_tag(StyleTag::Cursor));
        }

        #[test]
        fn cursor_on_empty_row_inserts_marker_segment() {
            let filled = fill_character_width(Vec::new(), 0, 0, 0, false, 0, true);
            assert_eq!(filled.len(), 1);
            assert!(filled[0].has_tag(StyleTag::Cursor));
        }
    }

    mod explode_and_merge {
        use super::*;
        use ratatui::style::{Color, Style};

        #[test]
        fn explode_yields_one_segment_per_char() {
            let red = Style::default().fg(Color::Red);
            let exploded = explode_segments(&[StyledSegment::styled("ab", red), StyledSegment::raw("é")]);
            assert_eq!(exploded.len(), 3);
            assert_eq!(exploded[1].text, "b");
            assert_eq!(exploded[1].style, red);
            assert_eq!(exploded[2].text, "é");
        }

        #[test]
        fn merge_joins_equal_neighbours_only() {
            let red = Style::default().fg(Color::Red);
            let segments = vec![
                StyledSegment::raw("a"),
                StyledSegment::raw("b"),
                StyledSegment::styled("c", red),
                StyledSegment::raw("d").with_tag(StyleTag::Selected),
            ];
            let merged = merge_segments(segments);
            assert_eq!(merged.len(), 3);
            assert_eq!(merged[0].text, "ab");
        }

        #[test]
        fn explode_then_merge_restores_text() {
            let segments = vec![StyledSegment::raw("hello "), StyledSegment::raw("world")];
            let merged = merge_segments(explode_segments(&segments));
            assert_eq!(segments_text(&merged), "hello world");
            assert_eq!(merged.len(), 1);
        }
    }
}
