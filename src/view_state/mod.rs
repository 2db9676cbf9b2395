//! View-state layer: window, layout and frame computation (pure).
//!
//! # Module Structure
//!
//! - `types`: Viewport, WindowRange, CursorPoint
//! - `visible_range`: which record indices a pass attempts to render
//! - `layout`: rows per record and the bottom-up row budget
//! - `frame`: RenderFrame, its blocks, flattening and cursor lookup
//! - `renderer`: the render pipeline producing a RenderFrame

pub mod frame;
pub mod layout;
pub mod renderer;
pub mod types;
pub mod visible_range;

pub use frame::{FrameBlock, FrameLine, RenderFrame};
pub use renderer::{render_frame, RenderContext};
pub use types::{CursorPoint, Viewport, WindowRange};
