//! Output handler traits and errors
//!
//! This module defines the trait interface shared by the CSV, JSON and text
//! writers.

use crate::record::PlanRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write CSV {}: {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("Failed to serialize JSON for {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for output handlers
///
/// A handler owns one output file. `write` replaces the whole file with the
/// given records; writing the same records twice produces the same file.
pub trait OutputHandler {
    /// Short format name used in log messages
    fn format_name(&self) -> &'static str;

    /// The file this handler writes
    fn path(&self) -> &Path;

    /// Writes all records, truncating any previous output
    fn write(&self, records: &[PlanRecord]) -> OutputResult<()>;
}

/// Creates the parent directory of an output path if needed
pub(crate) fn ensure_parent_dir(path: &Path) -> OutputResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| OutputError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

/// Writes bytes to a path, replacing existing content
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> OutputResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, bytes).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
