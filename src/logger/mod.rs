//! The named logger the facade delegates to: one severity threshold and the sinks it owns.
//! Each dispatched message becomes one record fanned out to every sink whose own
//! threshold admits it.

use crate::level::Severity;
use crate::output::{LogRecord, Sink};
use std::panic::Location;

/// Owns its sinks outright, so two loggers with the same name never share or stack outputs.
pub struct Logger {
    name: String,
    threshold: Severity,
    sinks: Vec<Box<dyn Sink>>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("threshold", &self.threshold)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl Logger {
    /// A logger with no sinks; messages pass the threshold check but go nowhere until a sink is added.
    #[must_use]
    pub fn new(name: impl Into<String>, threshold: Severity) -> Self {
        Self {
            name: name.into(),
            threshold,
            sinks: Vec::new(),
        }
    }

    /// Chaining form of [`Logger::add_sink`].
    #[must_use]
    pub fn with_sink(mut self, sink: impl Sink + 'static) -> Self {
        self.add_sink(sink);
        self
    }

    pub fn add_sink(&mut self, sink: impl Sink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Whether a message at `severity` passes the logger's own threshold.
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }

    /// Dispatches `msg` at `severity`, recording the caller's source line.
    #[track_caller]
    pub fn log(&self, severity: Severity, msg: &str) {
        self.log_at(severity, Location::caller().line(), msg);
    }

    /// Dispatches with an explicit line number, for callers that carry their own location.
    pub fn log_at(&self, severity: Severity, line: u32, msg: &str) {
        if !self.is_enabled(severity) {
            return;
        }

        let record = LogRecord::now(severity, &self.name, line, msg);

        for sink in &self.sinks {
            if severity >= sink.threshold() {
                let _ = sink.write(&record);
            }
        }
    }

    #[track_caller]
    pub fn debug(&self, msg: &str) {
        self.log(Severity::Debug, msg);
    }

    #[track_caller]
    pub fn info(&self, msg: &str) {
        self.log(Severity::Info, msg);
    }

    #[track_caller]
    pub fn warning(&self, msg: &str) {
        self.log(Severity::Warning, msg);
    }

    #[track_caller]
    pub fn error(&self, msg: &str) {
        self.log(Severity::Error, msg);
    }

    #[track_caller]
    pub fn critical(&self, msg: &str) {
        self.log(Severity::Critical, msg);
    }

    /// # Errors
    /// Returns the first I/O error encountered across all sinks.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for sink in &self.sinks {
            sink.flush()?;
        }
        Ok(())
    }

    /// Flushes and releases every sink. Every sink is closed even if an earlier one fails.
    ///
    /// # Errors
    /// Returns the first I/O error encountered.
    pub fn close(&self) -> Result<(), crate::Error> {
        let mut first_err = None;
        for sink in &self.sinks {
            if let Err(e) = sink.close() {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}
