//! Error types for logview.
//!
//! Errors follow a small hierarchy built with `thiserror`, composing via `?`
//! and `From` conversions:
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - File/stdin reading failures
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - `std::io::Error` - Terminal/TUI failures
//!
//! The scrolling/search engine itself has no error type: out-of-range requests
//! saturate, and empty stores or terms are no-ops.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All variants are fatal: they propagate to `main`, which restores the
/// terminal and prints the error to stderr.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read input from file or stdin.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Config file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Raised by the crossterm/ratatui layer (raw mode, alternate screen,
    /// drawing). Without a working terminal the pane cannot run.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading log input from files or stdin.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use logview::model::error::InputError;
///
/// let err = InputError::FileNotFound {
///     path: PathBuf::from("/tmp/missing.log")
/// };
/// assert!(err.to_string().contains("/tmp/missing.log"));
/// ```
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified log file does not exist at the given path.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No file was given and stdin is an interactive terminal.
    ///
    /// ```
    /// use logview::model::error::InputError;
    ///
    /// let msg = InputError::NoInput.to_string();
    /// assert!(msg.contains("file path or pipe data to stdin"));
    /// ```
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_converts_into_app_error() {
        fn fails() -> Result<(), AppError> {
            Err::<(), _>(InputError::NoInput)?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, AppError::Input(InputError::NoInput)));
        assert!(err.to_string().starts_with("Failed to read input"));
    }

    #[test]
    fn io_error_converts_into_input_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: InputError = io.into();
        assert!(matches!(err, InputError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn config_error_converts_into_app_error() {
        let err: AppError = ConfigError::ParseError {
            path: PathBuf::from("/tmp/bad.toml"),
            reason: "expected value".to_string(),
        }
        .into();
        assert!(err.to_string().contains("/tmp/bad.toml"));
    }
}
