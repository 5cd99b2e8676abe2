//! Usage:
//!   twinlog [--level L] [--name N] [--log-dir D] [--as L] [-v] <message>...

use clap::Parser;
use std::process::ExitCode;
use twinlog::cli::{Cli, run};

fn main() -> ExitCode {
    run(Cli::parse())
}
