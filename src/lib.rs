//! logview: a live, append-only log viewer pane for the terminal.
//!
//! Records stream into a [`store::LogStore`]; a [`state::LogView`] keeps the
//! selection, follow mode and search state for one pane and renders the
//! visible window into a [`view_state::RenderFrame`]. The [`view`] module is
//! the terminal shell around it.
//!
//! Pure state lives in `state/` and `view_state/`; everything touching the
//! terminal, files or stdin lives in `view/` and `source/`.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod store;
pub mod text;
pub mod view;
pub mod view_state;
