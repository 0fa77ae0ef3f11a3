//! Error types for the runner module.

use thiserror::Error;

/// Result type alias for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Errors that can occur while running the conversion tool.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Conversion tool failed ({status}): {command}\n{stderr}")]
    ConversionFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Compose file not found: {0}")]
    ComposeFileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
