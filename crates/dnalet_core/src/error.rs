//! Error types for the core module.

use std::path::PathBuf;
use thiserror::Error;

use dnalet_config::ConfigError;
use dnalet_runner::RunnerError;
use dnalet_unit::UnitError;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while processing generated units.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("general.env_file not specified")]
    MissingEnvFile,

    #[error("Service name is required")]
    MissingServiceName,

    #[error(
        "No output directory specified: use --roles or --output, or run next to ./roles with --service-name"
    )]
    NoOutputDirectory,

    #[error("Invalid unit path: {0}")]
    InvalidUnitPath(PathBuf),

    #[error("Failed to {action} {path}: {source}")]
    Fs {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl CoreError {
    pub(crate) fn fs(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Fs {
            action,
            path: path.into(),
            source,
        }
    }

    /// Whether the error comes from missing or invalid project configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingEnvFile | Self::Config(_))
    }

    /// Whether the error comes from the external conversion tool.
    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Runner(_))
    }
}
