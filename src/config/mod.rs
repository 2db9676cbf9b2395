//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{resolve, CliOverrides, ConfigError, ConfigFile, ResolvedConfig};
