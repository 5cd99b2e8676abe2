//! Severity levels and the fixed relation table that string levels are validated against.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ranked by urgency. Discriminants are the ranks used for threshold comparisons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Severity {
    /// Diagnostic detail, the facade's default level.
    #[default]
    Debug = 10,
    /// Normal operational milestones.
    Info = 20,
    /// Something unexpected that the program recovered from.
    Warning = 30,
    /// An operation failed.
    Error = 40,
    /// The program may not be able to continue.
    Critical = 50,
}

/// The one canonical relation table. Keys are exactly these five, in rank order.
pub const RELATIONS: [(&str, Severity); 5] = [
    ("debug", Severity::Debug),
    ("info", Severity::Info),
    ("warning", Severity::Warning),
    ("error", Severity::Error),
    ("critical", Severity::Critical),
];

/// Relation keys alone, for diagnostics and help output.
pub const RELATION_KEYS: [&str; 5] = ["debug", "info", "warning", "error", "critical"];

impl Severity {
    /// Numeric rank compared against logger and sink thresholds.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Lower-case relation key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// Upper-case name rendered into the `{level}` column of a log line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Critical,
        ]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level strings are matched case-insensitively; nothing else (whitespace included) is forgiven.
#[must_use]
pub fn normalize_level(level: &str) -> String {
    level.to_lowercase()
}

/// Normalizes `level` and looks it up in [`RELATIONS`].
///
/// # Errors
/// [`Error::InvalidRelation`] carrying the normalized string when it is not a relation key.
pub fn validate_level(level: &str) -> Result<Severity, Error> {
    let normalized = normalize_level(level);
    RELATIONS
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|&(_, severity)| severity)
        .ok_or_else(|| Error::invalid_relation(normalized))
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_level(s)
    }
}

impl TryFrom<String> for Severity {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Error> {
        validate_level(&value)
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.as_str().to_string()
    }
}
