//! Logger names arrive from callers that may hold any scalar (config values, CLI input, FFI),
//! so the argument is modelled as a small tagged value and checked before use.

use crate::Error;
use std::fmt;

/// Used when the caller gives no name: the identifier of the module that owns the facade.
pub const FALLBACK_NAME: &str = "twinlog::facade";

/// A name argument as supplied by the caller, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum NameArg {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl NameArg {
    /// Observed type reported in [`Error::InvalidNameType`].
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "str",
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for NameArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for NameArg {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for NameArg {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for NameArg {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<i64> for NameArg {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for NameArg {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for NameArg {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for NameArg {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for NameArg {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Resolves the logger name: absent falls back to [`FALLBACK_NAME`], non-empty text is used as given.
///
/// # Errors
/// [`Error::InvalidNameType`] for empty text or any non-text value.
pub fn resolve_name(name: Option<&NameArg>) -> Result<String, Error> {
    match name {
        None => Ok(FALLBACK_NAME.to_string()),
        Some(NameArg::Text(s)) if !s.is_empty() => Ok(s.clone()),
        Some(other) => Err(Error::InvalidNameType {
            name: other.to_string(),
            observed_type: other.type_name(),
        }),
    }
}
