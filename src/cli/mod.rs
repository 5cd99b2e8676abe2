//! Sample driver: builds one facade from command-line options and logs a single message.

use crate::facade::{DEFAULT_LEVEL, DEFAULT_LOG_DIR, Facade};
use crate::internal;
use crate::level::Severity;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// twinlog - Log a message to the console and a date-stamped file.
#[derive(Debug, Parser)]
#[command(name = "twinlog", version, about = "Log a message to the console and a date-stamped file")]
pub struct Cli {
    /// Logger threshold (debug, info, warning, error, critical)
    #[arg(short, long, default_value = DEFAULT_LEVEL)]
    pub level: String,
    /// Logger name
    #[arg(short, long)]
    pub name: Option<String>,
    /// Directory for the log file
    #[arg(short = 'd', long, default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,
    /// Level to log the message at
    #[arg(short = 'a', long = "as", default_value = DEFAULT_LEVEL, value_name = "LEVEL")]
    pub as_level: String,
    /// Print twinlog's own diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
    /// Log message
    #[arg(required = true)]
    pub message: Vec<String>,
}

/// Validation and I/O errors are reported through the internal logger and map to a failure exit code.
#[must_use]
pub fn run(cli: Cli) -> ExitCode {
    internal::init(if cli.verbose {
        Severity::Debug
    } else {
        Severity::Error
    });

    let mut builder = Facade::builder().level(cli.level).log_dir(cli.log_dir);
    if let Some(name) = cli.name {
        builder = builder.name(name);
    }

    let facade = match builder.build() {
        Ok(facade) => facade,
        Err(e) => {
            internal::error("CLI", &e.to_string());
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = facade.log(&cli.message.join(" "), &cli.as_level) {
        internal::error("CLI", &e.to_string());
        return ExitCode::FAILURE;
    }

    match facade.close() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("CLI", &format!("Failed to close log file: {e}"));
            ExitCode::FAILURE
        }
    }
}
