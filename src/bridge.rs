//! Lets a facade serve as the process-wide `log` crate backend, so `log::info!` and friends
//! land in the same console and file sinks.

use crate::facade::Facade;
use crate::level::Severity;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// `log` has no critical level and twinlog has no trace level; trace folds into debug.
#[must_use]
pub const fn severity_of(level: log::Level) -> Severity {
    match level {
        log::Level::Trace | log::Level::Debug => Severity::Debug,
        log::Level::Info => Severity::Info,
        log::Level::Warn => Severity::Warning,
        log::Level::Error => Severity::Error,
    }
}

#[must_use]
pub const fn level_filter(severity: Severity) -> LevelFilter {
    match severity {
        Severity::Debug => LevelFilter::Debug,
        Severity::Info => LevelFilter::Info,
        Severity::Warning => LevelFilter::Warn,
        Severity::Error | Severity::Critical => LevelFilter::Error,
    }
}

impl Log for Facade {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.logger().is_enabled(severity_of(metadata.level()))
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.logger().log_at(
            severity_of(record.level()),
            record.line().unwrap_or(0),
            &record.args().to_string(),
        );
    }

    fn flush(&self) {
        let _ = Facade::flush(self);
    }
}

impl Facade {
    /// Installs this facade as the `log` backend. The facade lives for the rest of the process.
    ///
    /// # Errors
    /// [`SetLoggerError`] if another `log` backend is already installed.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let filter = level_filter(self.level());
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}
