//! Log view state (pure).
//!
//! All state transitions are plain functions or methods on owned structs,
//! testable without a terminal.

pub mod filter;
pub mod log_view;
pub mod prompt;
pub mod redraw;
pub mod scroll;
pub mod search;

// Re-export for convenience
pub use filter::{FilterProgress, FilterState, FilterTask};
pub use log_view::{LogView, LogViewOptions};
pub use prompt::{Prompt, PromptKind, PromptOutcome};
pub use redraw::RedrawThrottle;
pub use scroll::ScrollState;
pub use search::{CasePolicy, LiteralMatcher, MatcherError, SearchState};
