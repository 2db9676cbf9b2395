//! Structured style representation for rendered log rows.
//!
//! A rendered row is a list of [`StyledSegment`]s. Each segment carries a
//! visual ratatui [`Style`] (colors from the record itself) plus a set of
//! semantic [`StyleTags`] that the render pipeline overlays at render time
//! (selection, search matches, cursor placement).

use ratatui::style::Style;

// ===== StyleTag =====

/// Semantic style classes composed onto segments at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    /// Segment belongs to the selected record.
    Selected,
    /// Character is part of a search match on the selected record.
    SearchCurrent,
    /// Character is part of a search match on any other record.
    SearchOther,
    /// Marks the segment that carries the logical cursor.
    Cursor,
    /// Segment is part of the table header.
    Header,
}

impl StyleTag {
    /// All tags, in bit order.
    pub const ALL: [StyleTag; 5] = [
        StyleTag::Selected,
        StyleTag::SearchCurrent,
        StyleTag::SearchOther,
        StyleTag::Cursor,
        StyleTag::Header,
    ];

    const fn bit(self) -> u8 {
        match self {
            StyleTag::Selected => 1 << 0,
            StyleTag::SearchCurrent => 1 << 1,
            StyleTag::SearchOther => 1 << 2,
            StyleTag::Cursor => 1 << 3,
            StyleTag::Header => 1 << 4,
        }
    }
}

// ===== StyleTags =====

/// A small set of [`StyleTag`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleTags(u8);

impl StyleTags {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Set containing exactly one tag.
    pub const fn only(tag: StyleTag) -> Self {
        Self(tag.bit())
    }

    /// Check whether the set contains `tag`.
    pub fn contains(self, tag: StyleTag) -> bool {
        self.0 & tag.bit() != 0
    }

    /// Add `tag` to the set.
    pub fn insert(&mut self, tag: StyleTag) {
        self.0 |= tag.bit();
    }

    /// Remove `tag` from the set.
    pub fn remove(&mut self, tag: StyleTag) {
        self.0 &= !tag.bit();
    }

    /// Return a copy of the set with `tag` added.
    pub fn with(mut self, tag: StyleTag) -> Self {
        self.insert(tag);
        self
    }

    /// Check if no tags are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the tags in the set.
    pub fn iter(self) -> impl Iterator<Item = StyleTag> {
        StyleTag::ALL.into_iter().filter(move |tag| self.contains(*tag))
    }
}

impl FromIterator<StyleTag> for StyleTags {
    fn from_iter<I: IntoIterator<Item = StyleTag>>(iter: I) -> Self {
        let mut tags = Self::EMPTY;
        for tag in iter {
            tags.insert(tag);
        }
        tags
    }
}

// ===== StyledSegment =====

/// A run of text sharing one visual style and one tag set.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSegment {
    /// The text of this run. May contain `\n` for multi-line records.
    pub text: String,
    /// Visual style from the record (level colors, dim timestamps).
    pub style: Style,
    /// Semantic overlays.
    pub tags: StyleTags,
}

impl StyledSegment {
    /// Segment with default style and no tags.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            tags: StyleTags::EMPTY,
        }
    }

    /// Segment with the given visual style and no tags.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            tags: StyleTags::EMPTY,
        }
    }

    /// Return this segment with `tag` added.
    pub fn with_tag(mut self, tag: StyleTag) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Check whether this segment carries `tag`.
    pub fn has_tag(&self, tag: StyleTag) -> bool {
        self.tags.contains(tag)
    }

    /// Number of chars in this segment.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Concatenate the text of all segments.
pub fn segments_text(segments: &[StyledSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

/// Add `tag` to every segment.
pub fn overlay_tag(mut segments: Vec<StyledSegment>, tag: StyleTag) -> Vec<StyledSegment> {
    for segment in &mut segments {
        segment.tags.insert(tag);
    }
    segments
}
