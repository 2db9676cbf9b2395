//! Log input sources.
//!
//! - File loading for read-once file input
//! - Stdin for piped input (live streaming)
//! - Unified InputSource enum for both
//!
//! Sources yield raw lines. [`parse_line`] turns each into the fields of a
//! store record.

use crate::model::error::InputError;
use crate::store::LogStore;
use chrono::{DateTime, Local};
use std::path::PathBuf;
use tracing::{debug, Level};

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Channel name for records read from stdin.
pub const STDIN_CHANNEL: &str = "stdin";

/// One input line split into record fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Arrival time.
    pub timestamp: DateTime<Local>,
    /// Level from the leading token, INFO if none.
    pub level: Level,
    /// Origin of the line.
    pub channel: String,
    /// Full line text, trailing `\r` removed.
    pub message: String,
}

/// Infer a level from the first word of `line`.
///
/// Recognizes `ERROR`, `WARN`/`WARNING`, `INFO`, `DEBUG` and `TRACE` in any
/// case, optionally wrapped in brackets or followed by a colon.
pub fn infer_level(line: &str) -> Option<Level> {
    let word = line.split_whitespace().next()?;
    let token = word.trim_matches(|c: char| matches!(c, '[' | ']' | ':' | '<' | '>'));
    match token.to_ascii_uppercase().as_str() {
        "ERROR" | "ERR" => Some(Level::ERROR),
        "WARN" | "WARNING" => Some(Level::WARN),
        "INFO" => Some(Level::INFO),
        "DEBUG" => Some(Level::DEBUG),
        "TRACE" => Some(Level::TRACE),
        _ => None,
    }
}

/// Build record fields for one raw line.
pub fn parse_line(line: &str, channel: &str, timestamp: DateTime<Local>) -> SourceLine {
    let message = line.strip_suffix('\r').unwrap_or(line);
    SourceLine {
        timestamp,
        level: infer_level(message).unwrap_or(Level::INFO),
        channel: channel.to_string(),
        message: message.to_string(),
    }
}

/// Unified input source.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// File source - read-once loading
    File(FileSource),
    /// Stdin source - reads from piped stdin (live streaming)
    Stdin(StdinSource),
}

impl InputSource {
    /// Poll for new lines. Non-blocking.
    ///
    /// - File: all lines on first call, empty vec after
    /// - Stdin: incremental as data arrives
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors.
    pub fn poll(&mut self) -> Result<Vec<SourceLine>, InputError> {
        let now = Local::now();
        let (raw, channel) = match self {
            InputSource::File(f) => (f.drain_lines(), f.channel().to_string()),
            InputSource::Stdin(s) => (s.poll()?, STDIN_CHANNEL.to_string()),
        };
        Ok(raw.iter().map(|line| parse_line(line, &channel, now)).collect())
    }

    /// Check if the source can still receive more data.
    pub fn is_live(&self) -> bool {
        match self {
            InputSource::File(_) => false,
            InputSource::Stdin(s) => !s.is_complete(),
        }
    }

    /// Poll and append every new line to `store`. Returns the count appended.
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors.
    pub fn drain_into(&mut self, store: &mut LogStore) -> Result<usize, InputError> {
        let lines = self.poll()?;
        let count = lines.len();
        for line in lines {
            store.append(line.timestamp, line.level, line.channel, line.message);
        }
        if count > 0 {
            debug!(count, total = store.total_count(), "appended input lines");
        }
        Ok(count)
    }
}

/// Detect and create appropriate input source.
///
/// 1. If a file path is provided: FileSource (loads on construction)
/// 2. Otherwise: StdinSource, which requires piped stdin
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is a TTY.
/// Returns `InputError::FileNotFound` if the file does not exist.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}
