//! Core view-state value types

/// Viewport dimensions in terminal cells.
///
/// Either dimension may be zero before the first layout pass; the window and
/// layout calculations have degenerate branches for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Width in terminal columns.
    pub width: usize,
    /// Height in terminal rows.
    pub height: usize,
}

impl Viewport {
    /// Create new viewport dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Rows moved by one page: the height, or 1 when the height is unknown.
    pub fn page_rows(&self) -> usize {
        if self.height > 0 {
            self.height
        } else {
            1
        }
    }
}

/// Inclusive range of record indices eligible for display.
///
/// # Invariants
/// - `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowRange {
    /// First record index (inclusive).
    pub start: usize,
    /// Last record index (inclusive).
    pub end: usize,
}

impl WindowRange {
    /// Create a new range.
    ///
    /// # Panics
    /// In debug builds, panics if `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "window start {start} past end {end}");
        Self { start, end }
    }

    /// Number of indices in the range.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false: an inclusive range holds at least one index.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if `index` lies within the range.
    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    /// Indices from `end` down to `start`.
    pub fn bottom_up(&self) -> impl Iterator<Item = usize> {
        (self.start..=self.end).rev()
    }
}

/// A (column, row) position within the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPoint {
    /// Column (0-indexed).
    pub column: usize,
    /// Row (0-indexed).
    pub row: usize,
}

impl CursorPoint {
    /// Create a new point.
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_rows_falls_back_to_one() {
        assert_eq!(Viewport::new(80, 0).page_rows(), 1);
        assert_eq!(Viewport::new(80, 24).page_rows(), 24);
    }

    #[test]
    fn window_range_is_inclusive() {
        let range = WindowRange::new(2, 4);
        assert_eq!(range.len(), 3);
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
    }

    #[test]
    fn bottom_up_iterates_newest_first() {
        let indices: Vec<_> = WindowRange::new(2, 4).bottom_up().collect();
        assert_eq!(indices, vec![4, 3, 2]);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn new_panics_when_start_greater_than_end() {
        WindowRange::new(5, 4);
    }
}
