//! Status bar: position and mode flags, or the open search/filter prompt.

use crate::state::Prompt;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// What the status bar reports when no prompt is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo<'a> {
    /// Selected record index.
    pub selected: usize,
    /// Number of records in the store.
    pub total: usize,
    /// Following new records.
    pub follow: bool,
    /// Wrapping long lines.
    pub wrap: bool,
    /// Table view on.
    pub table_view: bool,
    /// Input can still grow.
    pub live: bool,
    /// Active search term.
    pub search_term: Option<&'a str>,
    /// Active or pending filter term.
    pub filter_term: Option<&'a str>,
    /// Filter still waiting for its deadline.
    pub filter_pending: bool,
}

impl StatusInfo<'_> {
    /// `selected/total`, 1-based. `0/0` for an empty store.
    pub fn position(&self) -> String {
        if self.total == 0 {
            "0/0".to_string()
        } else {
            format!("{}/{}", self.selected + 1, self.total)
        }
    }

    fn flags(&self) -> String {
        let mut flags = Vec::new();
        if self.follow {
            flags.push("[FOLLOW]");
        }
        if self.wrap {
            flags.push("[WRAP]");
        }
        if self.table_view {
            flags.push("[TABLE]");
        }
        if self.live {
            flags.push("[LIVE]");
        }
        flags.join(" ")
    }
}

/// Status bar widget.
pub enum StatusBar<'a> {
    /// Show position and mode flags.
    Info(StatusInfo<'a>),
    /// Show the prompt being typed.
    Prompt(&'a Prompt),
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self {
            StatusBar::Info(info) => info_line(&info),
            StatusBar::Prompt(prompt) => prompt_line(prompt),
        };
        Paragraph::new(line)
            .style(Style::default().bg(Color::Blue).fg(Color::White))
            .render(area, buf);
    }
}

fn info_line<'a>(info: &StatusInfo<'a>) -> Line<'a> {
    let mut spans = vec![
        Span::styled(format!(" {} ", info.position()), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(info.flags()),
    ];
    if let Some(term) = info.search_term {
        spans.push(Span::raw(format!("  /{term}")));
    }
    if let Some(term) = info.filter_term {
        let suffix = if info.filter_pending { " ..." } else { "" };
        spans.push(Span::raw(format!("  \\{term}{suffix}")));
    }
    Line::from(spans)
}

fn prompt_line(prompt: &Prompt) -> Line<'static> {
    let text = prompt.text();
    let cursor = prompt.cursor();
    let before: String = text.chars().take(cursor).collect();
    let mut rest = text.chars().skip(cursor);
    let under = rest.next().map_or_else(|| " ".to_string(), String::from);
    let after: String = rest.collect();

    Line::from(vec![
        Span::raw(format!("{}{}", prompt.kind().sigil(), before)),
        Span::styled(
            under,
            Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(after),
    ])
}
