//! Validated, in-memory facade configuration. Nothing here is read from disk.

use crate::fmt::{DEFAULT_FILE_STAMP_FORMAT, DEFAULT_LINE_TEMPLATE, DEFAULT_TIMESTAMP_FORMAT};
use crate::level::Severity;
use crate::name::FALLBACK_NAME;
use crate::output::ConsoleTarget;
use std::path::PathBuf;

/// Level used when construction or a call does not name one.
pub const DEFAULT_LEVEL: &str = "debug";

/// Relative to the process working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Every value here has already passed validation; [`crate::FacadeBuilder`] is the only
/// path from raw caller input to a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacadeConfig {
    /// The logger's own threshold.
    pub level: Severity,
    pub name: String,
    pub log_dir: PathBuf,
    /// Console sink threshold, independent of `level`.
    pub console_level: Severity,
    /// File sink threshold, independent of `level`.
    pub file_level: Severity,
    pub console_target: ConsoleTarget,
    /// Shared by both sinks.
    pub line_template: String,
    pub timestamp_format: String,
    /// strftime format for the log file stem.
    pub file_stamp_format: String,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            level: Severity::Debug,
            name: FALLBACK_NAME.to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            console_level: Severity::Debug,
            file_level: Severity::Debug,
            console_target: ConsoleTarget::Stdout,
            line_template: DEFAULT_LINE_TEMPLATE.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            file_stamp_format: DEFAULT_FILE_STAMP_FORMAT.to_string(),
        }
    }
}
