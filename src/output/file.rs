//! File sink: one date-stamped file per sink, opened once and held until close.

use crate::fmt::{LineFormat, file_stamp};
use crate::internal;
use crate::level::Severity;

use super::{LogRecord, Sink};
use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Creates `dir` (and parents) if it does not exist. Existing directories are left untouched.
///
/// # Errors
/// I/O errors from directory creation.
pub fn create_log_directory(dir: &Path) -> Result<(), crate::Error> {
    if dir.is_dir() {
        return Ok(());
    }

    match fs::create_dir_all(dir) {
        Ok(()) => {
            internal::debug("FILE", &format!("Created directory: {}", dir.display()));
            Ok(())
        }
        Err(e) => {
            internal::error(
                "FILE",
                &format!("Failed to create directory {}: {}", dir.display(), e),
            );
            Err(e.into())
        }
    }
}

/// Holds the handle for its whole life so every line lands in the one file stamped at open.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    threshold: Severity,
    format: LineFormat,
    /// `None` once closed.
    file: Mutex<Option<BufWriter<File>>>,
}

impl FileSink {
    /// Opens `<log_dir>/<stamp>.log`, where the stamp is the current local time in `stamp_format`.
    ///
    /// # Errors
    /// I/O errors creating the directory or opening the file.
    pub fn open(
        log_dir: impl AsRef<Path>,
        threshold: Severity,
        format: LineFormat,
        stamp_format: &str,
    ) -> Result<Self, crate::Error> {
        let log_dir = log_dir.as_ref();
        let filename = format!("{}.log", file_stamp(&Local::now(), stamp_format));
        create_log_directory(log_dir)?;
        Self::open_path(log_dir.join(filename), threshold, format)
    }

    /// Opens an exact path in append mode. The parent directory must already exist.
    ///
    /// # Errors
    /// I/O errors opening the file.
    pub fn open_path(
        path: impl Into<PathBuf>,
        threshold: Severity,
        format: LineFormat,
    ) -> Result<Self, crate::Error> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        internal::debug("FILE", &format!("Opened log file: {}", path.display()));

        Ok(Self {
            path,
            threshold,
            format,
            file: Mutex::new(Some(BufWriter::new(file))),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

impl Sink for FileSink {
    fn threshold(&self) -> Severity {
        self.threshold
    }

    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let mut guard = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(file) = guard.as_mut() else {
            return Ok(());
        };

        // Line and newline in one write, flushed per record so readers see complete lines.
        let mut content = self.format.render(record);
        content.push('\n');
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        if let Some(file) = self
            .file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_mut()
        {
            file.flush()?;
        }
        Ok(())
    }

    fn close(&self) -> Result<(), crate::Error> {
        let taken = self
            .file
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(mut file) = taken {
            file.flush()?;
            internal::debug("FILE", &format!("Closed log file: {}", self.path.display()));
        }
        Ok(())
    }
}
