//! Error types for the unit module.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for unit file operations.
pub type UnitResult<T> = Result<T, UnitError>;

/// Errors that can occur while reading or writing unit files.
///
/// Malformed lines are not errors; they are skipped during parsing.
#[derive(Error, Debug)]
pub enum UnitError {
    #[error("Failed to read unit file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write unit file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
