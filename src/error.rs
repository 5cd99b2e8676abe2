//! Unified error type for all twinlog operations.

use crate::level::RELATION_KEYS;

/// Error type for twinlog operations.
#[derive(Debug)]
pub enum Error {
    /// A level string (at construction or per call) is not one of the recognized relations.
    /// Carries the normalized offending string.
    InvalidRelation { relation: String },
    /// A logger name was supplied but is not a non-empty string.
    InvalidNameType { name: String, observed_type: &'static str },
    /// I/O error while creating the log directory, opening the file, or flushing a sink.
    Io(std::io::Error),
}

impl Error {
    pub(crate) fn invalid_relation(relation: impl Into<String>) -> Self {
        Self::InvalidRelation {
            relation: relation.into(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRelation { relation } => write!(
                f,
                "{relation} -> invalid relation, expected one of {}",
                RELATION_KEYS.join(", ")
            ),
            Self::InvalidNameType {
                name,
                observed_type,
            } => write!(
                f,
                "Type({observed_type}) {name} -> invalid name type, it must be a non-empty string"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidRelation { .. } | Self::InvalidNameType { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
