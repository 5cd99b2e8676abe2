//! Console sink: the line a developer sees immediately, identical to what lands in the file.

use crate::fmt::LineFormat;
use crate::level::Severity;

use super::{LogRecord, Sink};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Which standard stream the console sink writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

impl ConsoleTarget {
    fn writer(self) -> Box<dyn Write + Send> {
        match self {
            Self::Stdout => Box::new(io::stdout()),
            Self::Stderr => Box::new(io::stderr()),
        }
    }
}

pub struct ConsoleSink {
    threshold: Severity,
    format: LineFormat,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("threshold", &self.threshold)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl ConsoleSink {
    #[must_use]
    pub fn new(target: ConsoleTarget, threshold: Severity, format: LineFormat) -> Self {
        Self::with_writer(target.writer(), threshold, format)
    }

    /// Any writer can stand in for the terminal; tests capture output this way.
    #[must_use]
    pub fn with_writer(
        writer: Box<dyn Write + Send>,
        threshold: Severity,
        format: LineFormat,
    ) -> Self {
        Self {
            threshold,
            format,
            writer: Mutex::new(writer),
        }
    }
}

impl Sink for ConsoleSink {
    fn threshold(&self) -> Severity {
        self.threshold
    }

    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let line = self.format.render(record);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()?;
        Ok(())
    }
}
