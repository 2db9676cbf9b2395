//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Move the selection up one line. Default: k/↑
    ScrollUp,
    /// Move the selection down one line. Default: j/↓
    ScrollDown,
    /// Move the selection up one viewport height. Default: Ctrl+u/Page Up
    PageUp,
    /// Move the selection down one viewport height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first record. Default: g/Home
    ScrollToTop,
    /// Jump to the newest record. Default: G/End
    ScrollToBottom,
    /// Scroll horizontally left when wrapping is off. Default: h/←
    ScrollLeft,
    /// Scroll horizontally right when wrapping is off. Default: l/→
    ScrollRight,

    // Pane modes
    /// Toggle following of new records. Default: f
    ToggleFollow,
    /// Toggle line wrapping. Default: w
    ToggleWrap,
    /// Toggle table view. Default: t
    ToggleTableView,

    // Search and filter
    /// Open the search prompt. Default: /
    StartSearch,
    /// Open the filter prompt. Default: \
    StartFilter,
    /// Jump to the next match below the selection. Default: n
    SearchForward,
    /// Jump to the next match above the selection. Default: N
    SearchBackward,
    /// Turn off match highlighting, keeping the term. Default: Esc
    ClearHighlight,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
