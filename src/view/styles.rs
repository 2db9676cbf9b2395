//! Mapping from semantic style tags to terminal styles.
//!
//! Records carry their own colors; the render pipeline adds [`StyleTag`]s on
//! top. This module decides what each tag looks like on screen.

use crate::model::styled::{StyleTag, StyledSegment};
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether colors are enabled.
///
/// Disabled by the `NO_COLOR` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Read `NO_COLOR` from the environment.
    pub fn from_env() -> Self {
        Self::new(std::env::var_os("NO_COLOR").is_none())
    }

    /// Explicit setting.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PaneStyles =====

/// Terminal styles for each semantic tag.
///
/// - Selected: dark gray background
/// - SearchCurrent: black on yellow
/// - SearchOther: black on cyan
/// - Header: bold
///
/// Without colors, the selection is reversed and matches are underlined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneStyles {
    colors: bool,
    selected: Style,
    search_current: Style,
    search_other: Style,
    header: Style,
}

impl PaneStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                colors: true,
                selected: Style::default().bg(Color::DarkGray),
                search_current: Style::default().fg(Color::Black).bg(Color::Yellow),
                search_other: Style::default().fg(Color::Black).bg(Color::Cyan),
                header: Style::default().add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                colors: false,
                selected: Style::default().add_modifier(Modifier::REVERSED),
                search_current: Style::default().add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
                search_other: Style::default().add_modifier(Modifier::UNDERLINED),
                header: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }

    /// Style for one tag. `Cursor` has no visual style of its own.
    pub fn tag_style(&self, tag: StyleTag) -> Style {
        match tag {
            StyleTag::Selected => self.selected,
            StyleTag::SearchCurrent => self.search_current,
            StyleTag::SearchOther => self.search_other,
            StyleTag::Header => self.header,
            StyleTag::Cursor => Style::default(),
        }
    }

    /// Final style for a segment: the record's style patched by its tags.
    ///
    /// Search tags win over selection, so matches stay visible on the
    /// selected row.
    pub fn segment_style(&self, segment: &StyledSegment) -> Style {
        let base = if self.colors {
            segment.style
        } else {
            Style::default().add_modifier(segment.style.add_modifier)
        };
        [
            StyleTag::Header,
            StyleTag::Selected,
            StyleTag::SearchOther,
            StyleTag::SearchCurrent,
        ]
        .into_iter()
        .filter(|tag| segment.has_tag(*tag))
        .fold(base, |style, tag| style.patch(self.tag_style(tag)))
    }

    /// Style of padding cells on the selected row's empty space.
    pub fn selected(&self) -> Style {
        self.selected
    }
}

impl Default for PaneStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env())
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    fn colored() -> PaneStyles {
        PaneStyles::with_color_config(ColorConfig::new(true))
    }

    #[test]
    fn untagged_segment_keeps_record_style() {
        let style = Style::default().fg(Color::Red);
        let segment = StyledSegment::styled("x", style);
        assert_eq!(colored().segment_style(&segment), style);
    }

    #[test]
    fn selected_adds_dark_gray_background() {
        let segment = StyledSegment::styled("x", Style::default().fg(Color::Red))
            .with_tag(StyleTag::Selected);
        let style = colored().segment_style(&segment);
        assert_eq!(style.bg, Some(Color::DarkGray));
        assert_eq!(style.fg, Some(Color::Red));
    }

    #[test]
    fn search_current_wins_over_selection() {
        let segment = StyledSegment::raw("x")
            .with_tag(StyleTag::Selected)
            .with_tag(StyleTag::SearchCurrent);
        let style = colored().segment_style(&segment);
        assert_eq!(style.bg, Some(Color::Yellow));
        assert_eq!(style.fg, Some(Color::Black));
    }

    #[test]
    fn search_other_is_black_on_cyan() {
        let segment = StyledSegment::raw("x").with_tag(StyleTag::SearchOther);
        let style = colored().segment_style(&segment);
        assert_eq!(style.bg, Some(Color::Cyan));
    }

    #[test]
    fn cursor_tag_is_invisible() {
        let segment = StyledSegment::raw("x").with_tag(StyleTag::Cursor);
        assert_eq!(colored().segment_style(&segment), Style::default());
    }

    #[test]
    fn no_color_drops_record_colors_and_reverses_selection() {
        let styles = PaneStyles::with_color_config(ColorConfig::new(false));
        let segment = StyledSegment::styled("x", Style::default().fg(Color::Red))
            .with_tag(StyleTag::Selected);
        let style = styles.segment_style(&segment);
        assert_eq!(style.fg, None);
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }
}
