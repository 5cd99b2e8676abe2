//! The facade: validates a level and a name, wires one console sink and one date-stamped
//! file sink onto a logger it owns, and dispatches string-levelled messages to it.

mod builder;
mod config;

pub use builder::FacadeBuilder;
pub use config::{DEFAULT_LEVEL, DEFAULT_LOG_DIR, FacadeConfig};

use crate::Error;
use crate::fmt::LineFormat;
use crate::internal;
use crate::level::{Severity, validate_level};
use crate::logger::Logger;
use crate::name::NameArg;
use crate::output::{ConsoleSink, FileSink};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Owns its logger and both sinks; dropping the facade flushes and closes them.
#[derive(Debug)]
pub struct Facade {
    logger: Logger,
    level: Severity,
    log_file: PathBuf,
}

impl Facade {
    #[must_use]
    pub fn builder() -> FacadeBuilder {
        FacadeBuilder::new()
    }

    /// Facade at `level` under the fallback name, logging into [`DEFAULT_LOG_DIR`].
    ///
    /// # Errors
    /// [`Error::InvalidRelation`] for an unknown level, [`Error::Io`] if the log file cannot be opened.
    pub fn new(level: &str) -> Result<Self, Error> {
        FacadeBuilder::new().level(level).build()
    }

    /// Facade at `level` under `name`, logging into [`DEFAULT_LOG_DIR`].
    ///
    /// # Errors
    /// [`Error::InvalidRelation`], [`Error::InvalidNameType`], or [`Error::Io`].
    pub fn named(level: &str, name: impl Into<NameArg>) -> Result<Self, Error> {
        FacadeBuilder::new().level(level).name(name).build()
    }

    /// # Errors
    /// [`Error::Io`] if the log directory or file cannot be created.
    pub fn from_config(config: FacadeConfig) -> Result<Self, Error> {
        Self::open(config, None)
    }

    pub(crate) fn open(
        config: FacadeConfig,
        console_writer: Option<Box<dyn Write + Send>>,
    ) -> Result<Self, Error> {
        let format = LineFormat::new(&config.line_template, config.timestamp_format.as_str());

        // The file is the only fallible step; open it before anything else is assembled.
        let file = FileSink::open(
            &config.log_dir,
            config.file_level,
            format.clone(),
            &config.file_stamp_format,
        )?;
        let log_file = file.path().to_path_buf();

        let console = match console_writer {
            Some(writer) => ConsoleSink::with_writer(writer, config.console_level, format),
            None => ConsoleSink::new(config.console_target, config.console_level, format),
        };

        internal::debug(
            "FACADE",
            &format!(
                "Logger {} ready: level={}, file={}",
                config.name,
                config.level,
                log_file.display()
            ),
        );

        let logger = Logger::new(config.name, config.level)
            .with_sink(console)
            .with_sink(file);

        Ok(Self {
            logger,
            level: config.level,
            log_file,
        })
    }

    /// Normalizes `level` and forwards `message` to the matching severity method.
    /// The recorded line number is the caller's.
    ///
    /// # Errors
    /// [`Error::InvalidRelation`] for an unknown level; nothing is written in that case.
    #[track_caller]
    pub fn log(&self, message: &str, level: &str) -> Result<(), Error> {
        match validate_level(level)? {
            Severity::Debug => self.logger.debug(message),
            Severity::Info => self.logger.info(message),
            Severity::Warning => self.logger.warning(message),
            Severity::Error => self.logger.error(message),
            Severity::Critical => self.logger.critical(message),
        }
        Ok(())
    }

    /// [`Facade::log`] at [`DEFAULT_LEVEL`].
    ///
    /// # Errors
    /// None in practice; the default level always validates.
    #[track_caller]
    pub fn log_default(&self, message: &str) -> Result<(), Error> {
        self.log(message, DEFAULT_LEVEL)
    }

    /// Direct access for callers that already hold a typed [`Severity`].
    #[must_use]
    pub const fn logger(&self) -> &Logger {
        &self.logger
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.logger.name()
    }

    #[must_use]
    pub const fn level(&self) -> Severity {
        self.level
    }

    #[must_use]
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// # Errors
    /// First I/O error across both sinks.
    pub fn flush(&self) -> Result<(), Error> {
        self.logger.flush()
    }

    /// Flushes both sinks and releases the file. Idempotent; later file writes are dropped
    /// while console output continues.
    ///
    /// # Errors
    /// First I/O error from the final flush.
    pub fn shutdown(&self) -> Result<(), Error> {
        self.logger.close()
    }

    /// Consuming form of [`Facade::shutdown`] that reports the final flush result.
    ///
    /// # Errors
    /// First I/O error from the final flush.
    pub fn close(self) -> Result<(), Error> {
        internal::debug("FACADE", &format!("Closing logger {}", self.name()));
        self.shutdown()
    }
}

impl Drop for Facade {
    fn drop(&mut self) {
        if let Err(e) = self.logger.close() {
            internal::error(
                "FACADE",
                &format!("Failed to close logger {}: {e}", self.logger.name()),
            );
        }
    }
}
