//! Quadlet generator trait and types.

use std::path::Path;

use crate::error::RunnerResult;

/// Captured output of a successful conversion.
#[derive(Debug, Clone, Default)]
pub struct GenerationOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Converts a Compose file into Quadlet unit files.
pub trait QuadletGenerator: Send + Sync {
    /// Tool name used in log messages.
    fn name(&self) -> &str;

    /// Write one unit file per service and resource of `compose_file` into
    /// `output_dir`. A nonzero tool exit is an error.
    fn generate(&self, compose_file: &Path, output_dir: &Path) -> RunnerResult<GenerationOutput>;
}
