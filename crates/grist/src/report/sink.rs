//! Report output sinks.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{GristError, Result};

/// Destination for rendered report text.
///
/// Rendering happens fully before any sink write, so a failing sink
/// never leaves a partial report behind on the happy path.
pub trait ReportSink {
    fn write_report(&mut self, text: &str) -> Result<()>;
}

/// Writes identical text to stdout and to a result file, creating the
/// destination directory if needed.
pub struct TeeSink {
    path: PathBuf,
}

impl TeeSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self, text: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = fs::File::create(&self.path)?;
        file.write_all(text.as_bytes())?;
        file.flush()
    }
}

impl ReportSink for TeeSink {
    fn write_report(&mut self, text: &str) -> Result<()> {
        // File first: if the path is unwritable we fail before printing.
        self.write_file(text).map_err(|e| GristError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        print!("{text}");
        Ok(())
    }
}

/// Collects report text in memory. Used by tests and embedders.
#[derive(Debug, Default)]
pub struct BufferSink {
    pub text: String,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for BufferSink {
    fn write_report(&mut self, text: &str) -> Result<()> {
        self.text.push_str(text);
        Ok(())
    }
}
