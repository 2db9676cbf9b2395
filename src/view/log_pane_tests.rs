//! Tests for pane row layout and the pane widget.

use super::*;
use crate::model::styled::segments_text;
use crate::view::styles::ColorConfig;
use ratatui::style::Color;

// ===== Helpers =====

fn line(block: usize, text: &str) -> FrameLine {
    FrameLine {
        block,
        record: Some(block),
        segments: vec![StyledSegment::raw(text)],
    }
}

fn geometry(width: usize, height: usize, wrap: bool) -> PaneGeometry {
    PaneGeometry {
        width,
        height,
        wrap,
        prefix_width: 0,
        horizontal_scroll: 0,
    }
}

fn texts(rows: &[PaneRow]) -> Vec<String> {
    rows.iter().map(|r| segments_text(&r.segments)).collect()
}

fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area();
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

// ===== Wrapping =====

mod wrapping {
    use super::*;

    #[test]
    fn short_line_is_one_row() {
        let rows = terminal_rows(&[line(0, "abc")], geometry(10, 5, true));
        assert_eq!(texts(&rows), vec!["abc"]);
    }

    #[test]
    fn long_line_wraps_at_width() {
        let rows = terminal_rows(&[line(0, "abcdefghij")], geometry(4, 5, true));
        assert_eq!(texts(&rows), vec!["abcd", "efgh", "ij"]);
        assert!(rows.iter().all(|r| r.block == 0));
    }

    #[test]
    fn continuation_rows_are_indented() {
        let mut geo = geometry(6, 5, true);
        geo.prefix_width = 2;
        let rows = terminal_rows(&[line(0, "abcdefghij")], geo);
        assert_eq!(texts(&rows), vec!["abcdef", "  ghij"]);
    }

    #[test]
    fn prefix_wider_than_pane_is_ignored() {
        let mut geo = geometry(3, 5, true);
        geo.prefix_width = 5;
        let rows = terminal_rows(&[line(0, "abcdef")], geo);
        assert_eq!(texts(&rows), vec!["abc", "def"]);
    }

    #[test]
    fn wide_chars_do_not_split() {
        let rows = terminal_rows(&[line(0, "日本語")], geometry(4, 5, true));
        assert_eq!(texts(&rows), vec!["日本", "語"]);
    }

    #[test]
    fn row_count_matches_frame_budget() {
        use crate::text::wrap_height;

        for (text, width, prefix) in [
            ("abcd日日日", 5, 0),
            ("api  日本語のメッセージ", 7, 5),
            ("abcdefghij", 4, 0),
            ("ab日c日d", 3, 1),
        ] {
            let mut geo = geometry(width, 10, true);
            geo.prefix_width = prefix;
            let rows = terminal_rows(&[line(0, text)], geo);
            assert_eq!(rows.len(), wrap_height(text, width, prefix).0, "{text:?} at {width}");
        }
    }

    #[test]
    fn selected_indent_keeps_selection() {
        let mut geo = geometry(4, 5, true);
        geo.prefix_width = 1;
        let selected = FrameLine {
            block: 0,
            record: Some(0),
            segments: vec![StyledSegment::raw("abcdef").with_tag(StyleTag::Selected)],
        };
        let rows = terminal_rows(&[selected], geo);
        assert!(rows[1].segments[0].has_tag(StyleTag::Selected));
    }
}

// ===== Horizontal scroll =====

mod cutting {
    use super::*;

    #[test]
    fn long_line_is_cut_without_wrap() {
        let rows = terminal_rows(&[line(0, "abcdefghij")], geometry(4, 5, false));
        assert_eq!(texts(&rows), vec!["abcd"]);
    }

    #[test]
    fn horizontal_scroll_skips_columns() {
        let mut geo = geometry(4, 5, false);
        geo.horizontal_scroll = 3;
        let rows = terminal_rows(&[line(0, "abcdefghij")], geo);
        assert_eq!(texts(&rows), vec!["defg"]);
    }

    #[test]
    fn scrolled_past_end_is_empty() {
        let mut geo = geometry(4, 5, false);
        geo.horizontal_scroll = 20;
        let rows = terminal_rows(&[line(0, "abc")], geo);
        assert_eq!(texts(&rows), vec![""]);
    }
}

// ===== Visible rows =====

mod layout {
    use super::*;

    #[test]
    fn short_content_is_bottom_aligned() {
        let lines = [line(0, "a"), line(1, "b")];
        let layout = PaneLayout::build(&lines, geometry(10, 4, true), 1);

        assert_eq!(layout.top_padding(), 2);
        assert_eq!(layout.block_at(0), None);
        assert_eq!(layout.block_at(2), Some(0));
        assert_eq!(layout.block_at(3), Some(1));
        assert_eq!(layout.block_at(4), None);
    }

    #[test]
    fn overflow_shows_bottom_when_cursor_is_last() {
        let lines = [line(0, "aaaaaaaa"), line(1, "b")];
        let layout = PaneLayout::build(&lines, geometry(4, 2, true), 1);
        assert_eq!(texts(layout.rows()), vec!["aaaa", "b"]);
    }

    #[test]
    fn overflow_keeps_cursor_row_visible() {
        let lines = [line(0, "a"), line(1, "bbbbbbbbbbbb")];
        let layout = PaneLayout::build(&lines, geometry(4, 2, true), 0);
        assert_eq!(texts(layout.rows()), vec!["a", "bbbb"]);
    }
}

// ===== Widget =====

#[test]
fn widget_draws_rows_with_tag_styles() {
    let styles = PaneStyles::with_color_config(ColorConfig::new(true));
    let lines = [
        line(0, "plain"),
        FrameLine {
            block: 1,
            record: Some(1),
            segments: vec![StyledSegment::raw("sel").with_tag(StyleTag::Selected)],
        },
    ];
    let layout = PaneLayout::build(&lines, geometry(8, 3, true), 1);

    let area = Rect::new(0, 0, 8, 3);
    let mut buffer = Buffer::empty(area);
    LogPaneWidget::new(&layout, &styles).render(area, &mut buffer);

    let rendered = buffer_lines(&buffer);
    assert_eq!(rendered[0].trim_end(), "");
    assert_eq!(rendered[1].trim_end(), "plain");
    assert_eq!(rendered[2].trim_end(), "sel");
    assert_eq!(buffer[(0, 2)].bg, Color::DarkGray);
}
