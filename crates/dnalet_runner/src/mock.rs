//! Mock Quadlet generator for testing.
//!
//! Writes predefined unit files instead of running podlet, and records every
//! call so tests can verify what the pipeline asked for.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{RunnerError, RunnerResult};
use crate::generator::{GenerationOutput, QuadletGenerator};

/// Captured call information for verification.
#[derive(Debug, Clone)]
pub struct CapturedCall {
    pub compose_file: PathBuf,
    pub output_dir: PathBuf,
}

/// Mock generator for testing.
#[derive(Clone, Default)]
pub struct MockGenerator {
    /// Unit files written on every call, as (file name, content).
    units: Arc<RwLock<Vec<(String, String)>>>,
    /// Simulated tool failure (stderr of the failed run).
    failure: Arc<RwLock<Option<String>>>,
    /// Captured calls for verification.
    calls: Arc<RwLock<Vec<CapturedCall>>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a unit file the mock will produce.
    pub fn with_unit(self, file_name: impl Into<String>, content: impl Into<String>) -> Self {
        self.units.write().push((file_name.into(), content.into()));
        self
    }

    /// Make every call fail as if the tool exited nonzero.
    pub fn fail_with(self, stderr: impl Into<String>) -> Self {
        *self.failure.write() = Some(stderr.into());
        self
    }

    /// All captured calls.
    pub fn calls(&self) -> Vec<CapturedCall> {
        self.calls.read().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().len()
    }
}

impl QuadletGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock-podlet"
    }

    fn generate(&self, compose_file: &Path, output_dir: &Path) -> RunnerResult<GenerationOutput> {
        self.calls.write().push(CapturedCall {
            compose_file: compose_file.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
        });

        if let Some(stderr) = self.failure.read().clone() {
            return Err(RunnerError::ConversionFailed {
                command: format!("mock-podlet compose {}", compose_file.display()),
                status: "exit status: 1".to_string(),
                stderr,
            });
        }

        let mut stdout = String::new();
        for (name, content) in self.units.read().iter() {
            let path = output_dir.join(name);
            fs::write(&path, content)?;
            stdout.push_str(&format!("Wrote to file: {}\n", path.display()));
        }

        Ok(GenerationOutput {
            stdout,
            stderr: String::new(),
        })
    }
}
