//! twinlog's own diagnostic logger. Reports directory creation, file handling and registry
//! decisions through the same line format the facade uses.
//!
//! Off until [`init`] is called; `OnceLock` makes the first call win even if several entry
//! points (binary, tests, host application) race to initialize it.

use crate::fmt::LineFormat;
use crate::level::Severity;
use crate::logger::Logger;
use crate::output::{ConsoleSink, ConsoleTarget};
use std::io::Write;
use std::sync::OnceLock;

/// Logger name used for the crate's own diagnostics.
pub const INTERNAL_NAME: &str = "twinlog";

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Enables diagnostics on stderr at `level` and above. Later calls are no-ops.
pub fn init(level: Severity) {
    install(|| {
        build_internal_logger(
            level,
            ConsoleSink::new(ConsoleTarget::Stderr, level, LineFormat::default()),
        )
    });
}

/// Like [`init`], but diagnostics go to `writer` instead of stderr. Host applications use
/// this to fold twinlog's diagnostics into their own stream.
pub fn init_with_writer(level: Severity, writer: impl Write + Send + 'static) {
    install(|| {
        build_internal_logger(
            level,
            ConsoleSink::with_writer(Box::new(writer), level, LineFormat::default()),
        )
    });
}

fn install(build: impl FnOnce() -> Logger) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(build);
    if !was_init {
        debug("INTERNAL", "Internal logger ready");
    }
}

#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

/// Threshold of the active diagnostics logger, `None` before [`init`].
#[must_use]
pub fn level() -> Option<Severity> {
    INTERNAL_LOGGER.get().map(Logger::threshold)
}

fn build_internal_logger(level: Severity, sink: ConsoleSink) -> Logger {
    Logger::new(INTERNAL_NAME, level).with_sink(sink)
}

/// Pre-init calls silently vanish rather than failing, so it is safe during early startup.
#[track_caller]
fn log(level: Severity, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log(level, &format!("{scope}: {msg}"));
    }
}

#[track_caller]
pub fn debug(scope: &str, msg: &str) {
    log(Severity::Debug, scope, msg);
}

#[track_caller]
pub fn info(scope: &str, msg: &str) {
    log(Severity::Info, scope, msg);
}

#[track_caller]
pub fn warn(scope: &str, msg: &str) {
    log(Severity::Warning, scope, msg);
}

#[track_caller]
pub fn error(scope: &str, msg: &str) {
    log(Severity::Error, scope, msg);
}
