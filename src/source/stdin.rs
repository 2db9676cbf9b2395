//! Stdin-based log source for piped input.
//!
//! A background thread reads lines and sends them over a channel; the event
//! loop drains the channel without blocking.

use crate::model::error::InputError;
use std::io::{BufRead, BufReader, IsTerminal, Read};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::warn;

#[derive(Debug)]
enum ReaderMessage {
    Line(String),
    Failed(std::io::Error),
}

/// Piped stdin source.
///
/// Supports streaming input (`tail -f app.log | logview`) and complete input
/// (`cat app.log | logview`).
#[derive(Debug)]
pub struct StdinSource {
    rx: Receiver<ReaderMessage>,
    complete: bool,
}

impl StdinSource {
    /// Start reading stdin on a background thread.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is an interactive terminal.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self::from_reader(stdin))
    }

    /// Start reading any reader on a background thread.
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut reader = BufReader::new(reader);
            let mut buffer = Vec::new();
            loop {
                buffer.clear();
                match reader.read_until(b'\n', &mut buffer) {
                    Ok(0) => break,
                    Ok(_) => {
                        let text = String::from_utf8_lossy(&buffer);
                        let line = text.trim_end_matches('\n').to_string();
                        if tx.send(ReaderMessage::Line(line)).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        let _ = tx.send(ReaderMessage::Failed(err));
                        break;
                    }
                }
            }
        });
        Self { rx, complete: false }
    }

    /// Take every line read so far. Non-blocking.
    ///
    /// Marks the source complete once the reader thread has finished.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if the reader failed. Lines read before the
    /// failure were returned by earlier polls.
    pub fn poll(&mut self) -> Result<Vec<String>, InputError> {
        let mut lines = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(ReaderMessage::Line(line)) => lines.push(line),
                Ok(ReaderMessage::Failed(err)) => {
                    self.complete = true;
                    warn!(error = %err, "stdin read failed");
                    return Err(err.into());
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.complete = true;
                    break;
                }
            }
        }
        Ok(lines)
    }

    /// Check if EOF has been reached (no more data will arrive).
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
