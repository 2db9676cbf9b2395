//! Read-once file source.

use crate::model::error::InputError;
use std::path::{Path, PathBuf};

/// File loaded at construction and handed out once.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    channel: String,
    pending: Vec<String>,
}

impl FileSource {
    /// Read the whole file.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path)?;
        let pending = String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect();

        let channel = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            path: path.to_path_buf(),
            channel,
            pending,
        })
    }

    /// Path the file was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Channel name for this file's records.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// All lines on the first call, nothing after.
    pub fn drain_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}
