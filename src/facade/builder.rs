//! Raw caller input goes in, a validated [`FacadeConfig`] comes out, and only then are
//! any directories or files touched.

use super::Facade;
use super::config::{DEFAULT_LEVEL, DEFAULT_LOG_DIR, FacadeConfig};
use crate::Error;
use crate::fmt::{DEFAULT_FILE_STAMP_FORMAT, DEFAULT_LINE_TEMPLATE, DEFAULT_TIMESTAMP_FORMAT};
use crate::level::validate_level;
use crate::name::{NameArg, resolve_name};
use crate::output::ConsoleTarget;
use std::io::Write;
use std::path::PathBuf;

/// Collects unchecked caller input so every value can be validated before anything is opened.
pub struct FacadeBuilder {
    level: String,
    name: Option<NameArg>,
    log_dir: PathBuf,
    console_level: String,
    file_level: String,
    console_target: ConsoleTarget,
    console_writer: Option<Box<dyn Write + Send>>,
    line_template: String,
    timestamp_format: String,
    file_stamp_format: String,
}

impl Default for FacadeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FacadeBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacadeBuilder")
            .field("level", &self.level)
            .field("name", &self.name)
            .field("log_dir", &self.log_dir)
            .field("console_level", &self.console_level)
            .field("file_level", &self.file_level)
            .field("console_target", &self.console_target)
            .field("console_writer", &self.console_writer.is_some())
            .finish_non_exhaustive()
    }
}

impl FacadeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            name: None,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            console_level: DEFAULT_LEVEL.to_string(),
            file_level: DEFAULT_LEVEL.to_string(),
            console_target: ConsoleTarget::Stdout,
            console_writer: None,
            line_template: DEFAULT_LINE_TEMPLATE.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            file_stamp_format: DEFAULT_FILE_STAMP_FORMAT.to_string(),
        }
    }

    /// The logger's threshold, any letter case.
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Without a name the logger is called [`crate::FALLBACK_NAME`].
    #[must_use]
    pub fn name(mut self, name: impl Into<NameArg>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    #[must_use]
    pub fn console_level(mut self, level: impl Into<String>) -> Self {
        self.console_level = level.into();
        self
    }

    #[must_use]
    pub fn file_level(mut self, level: impl Into<String>) -> Self {
        self.file_level = level.into();
        self
    }

    #[must_use]
    pub const fn console_target(mut self, target: ConsoleTarget) -> Self {
        self.console_target = target;
        self
    }

    /// Replaces the standard stream; `console_target` is then ignored.
    #[must_use]
    pub fn console_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.console_writer = Some(Box::new(writer));
        self
    }

    #[must_use]
    pub fn line_template(mut self, template: impl Into<String>) -> Self {
        self.line_template = template.into();
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    #[must_use]
    pub fn file_stamp_format(mut self, format: impl Into<String>) -> Self {
        self.file_stamp_format = format.into();
        self
    }

    /// Checks every input without side effects.
    ///
    /// # Errors
    /// [`Error::InvalidRelation`] for an unknown logger, console or file level;
    /// [`Error::InvalidNameType`] for an empty or non-text name.
    pub fn validate(&self) -> Result<FacadeConfig, Error> {
        let level = validate_level(&self.level)?;
        let name = resolve_name(self.name.as_ref())?;
        let console_level = validate_level(&self.console_level)?;
        let file_level = validate_level(&self.file_level)?;

        Ok(FacadeConfig {
            level,
            name,
            log_dir: self.log_dir.clone(),
            console_level,
            file_level,
            console_target: self.console_target,
            line_template: self.line_template.clone(),
            timestamp_format: self.timestamp_format.clone(),
            file_stamp_format: self.file_stamp_format.clone(),
        })
    }

    /// Validates, then creates the log directory, opens the file and attaches both sinks.
    ///
    /// # Errors
    /// Validation errors as in [`FacadeBuilder::validate`], or [`Error::Io`] when the
    /// directory or file cannot be created.
    pub fn build(self) -> Result<Facade, Error> {
        let config = self.validate()?;
        Facade::open(config, self.console_writer)
    }
}
