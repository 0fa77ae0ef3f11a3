//! Podlet CLI wrapper.
//!
//! Runs `podlet --file <output_dir> compose <compose_file>` and captures its
//! output. A nonzero exit status is reported as [`RunnerError::ConversionFailed`].

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::error::{RunnerError, RunnerResult};
use crate::generator::{GenerationOutput, QuadletGenerator};

const DEFAULT_PROGRAM: &str = "podlet";

/// Generator backed by the `podlet` binary.
#[derive(Debug, Clone)]
pub struct PodletCli {
    program: String,
}

impl Default for PodletCli {
    fn default() -> Self {
        Self::new()
    }
}

impl PodletCli {
    /// Use `podlet` from `PATH`.
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    /// Use a specific podlet binary.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Build the podlet arguments for one conversion.
    fn build_args(compose_file: &Path, output_dir: &Path) -> Vec<String> {
        vec![
            "--file".to_string(),
            output_dir.to_string_lossy().into_owned(),
            "compose".to_string(),
            compose_file.to_string_lossy().into_owned(),
        ]
    }

    /// Format command for logging.
    fn format_command(&self, args: &[String]) -> String {
        let mut cmd = self.program.clone();
        for arg in args {
            if arg.contains(' ') {
                cmd.push_str(&format!(" '{}'", arg));
            } else {
                cmd.push_str(&format!(" {}", arg));
            }
        }
        cmd
    }
}

impl QuadletGenerator for PodletCli {
    fn name(&self) -> &str {
        &self.program
    }

    fn generate(&self, compose_file: &Path, output_dir: &Path) -> RunnerResult<GenerationOutput> {
        if !compose_file.is_file() {
            return Err(RunnerError::ComposeFileNotFound(
                compose_file.display().to_string(),
            ));
        }

        let args = Self::build_args(compose_file, output_dir);
        let command = self.format_command(&args);
        debug!("Executing: {}", command);

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| RunnerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(RunnerError::ConversionFailed {
                command,
                status: output.status.to_string(),
                stderr,
            });
        }

        info!("Generated Quadlet units from {:?}", compose_file);
        Ok(GenerationOutput { stdout, stderr })
    }
}
