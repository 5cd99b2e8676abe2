//! `twinlog` - a validated logging facade with twin sinks.
//!
//! A [`Facade`] checks a severity level against the fixed relation table
//! (`debug`, `info`, `warning`, `error`, `critical`), resolves a logger name,
//! and attaches two sinks that render identical lines:
//! - the console (stdout by default)
//! - a date-stamped file, `<log_dir>/<MM_DD_YYYY_HH_MM_SS>.log`
//!
//! ```text
//! 2024-03-09 14:05:33,412 - worker-1 - [42] - INFO - hello
//! ```
//!
//! # Example
//!
//! ```no_run
//! use twinlog::Facade;
//!
//! let facade = Facade::builder()
//!     .level("info")
//!     .name("worker-1")
//!     .log_dir("logs")
//!     .build()?;
//!
//! facade.log("hello", "info")?;
//! facade.log("disk almost full", "WARNING")?;
//! assert!(facade.log("hello", "trace").is_err());
//!
//! facade.close()?;
//! # Ok::<(), twinlog::Error>(())
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `twinlog` demo binary
//! - `log`: lets a facade be installed as the `log` crate backend

pub mod error;
pub mod facade;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod name;
pub mod output;
pub mod registry;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "log")]
pub mod bridge;

pub use error::Error;
pub use facade::{DEFAULT_LEVEL, DEFAULT_LOG_DIR, Facade, FacadeBuilder, FacadeConfig};
pub use fmt::{FormatTemplate, LineFormat};
pub use level::{RELATIONS, Severity, normalize_level, validate_level};
pub use logger::Logger;
pub use name::{FALLBACK_NAME, NameArg, resolve_name};
pub use output::{ConsoleSink, ConsoleTarget, FileSink, LogRecord, Sink};
pub use registry::{Attach, Registry};
