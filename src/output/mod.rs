//! Sinks receive one fully-populated record per dispatched message. The `Sink` trait lets
//! callers attach destinations beyond the built-in console and file sinks.

mod console;
mod file;

pub use console::{ConsoleSink, ConsoleTarget};
pub use file::{FileSink, create_log_directory};

use crate::level::Severity;
use chrono::{DateTime, Local};

/// Everything a sink needs to render one line.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub severity: Severity,
    pub name: String,
    /// Source line of the call that produced the message.
    pub line: u32,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogRecord {
    /// Stamps the record with the current local time.
    #[must_use]
    pub fn now(severity: Severity, name: &str, line: u32, message: &str) -> Self {
        Self {
            severity,
            name: name.to_string(),
            line,
            message: message.to_string(),
            timestamp: Local::now(),
        }
    }
}

/// `Send + Sync` so a logger can be shared across threads; implementations serialize their own writes.
pub trait Sink: Send + Sync {
    /// Records below this severity are skipped for this sink, whatever the logger's threshold.
    fn threshold(&self) -> Severity;

    /// Renders and writes one record.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying stream or file.
    fn flush(&self) -> Result<(), crate::Error>;

    /// Flushes and releases the destination. Must be idempotent.
    ///
    /// # Errors
    /// I/O errors from the final flush.
    fn close(&self) -> Result<(), crate::Error> {
        self.flush()
    }
}
