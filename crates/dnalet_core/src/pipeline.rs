//! End-to-end conversion of a Compose file into role-ready Quadlet units.
//!
//! The conversion tool writes into a fresh build directory which is removed
//! on every exit path. Files already copied to the output directory and
//! renames already applied stay in place when a later step fails.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, info, warn};

use dnalet_config::ProjectConfig;
use dnalet_runner::QuadletGenerator;
use dnalet_unit::{UnitFile, CONTAINER_EXTENSION};

use crate::error::{CoreError, CoreResult};
use crate::network::{attach_network, write_network_unit};
use crate::paths::{list_files, list_units};
use crate::postprocess::UnitPostProcessor;
use crate::rename::{RenameEvent, UnitRenamer};
use crate::volumes::volume_table;

/// Name of the env file collected in the build directory.
const ENV_FILE_NAME: &str = ".env";

const BUILD_DIR_PREFIX: &str = "dnalet-build-";

/// Inputs of one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub compose_file: PathBuf,
    pub service_name: String,
    pub output_dir: PathBuf,
    /// Env file to seed the shared env file with.
    pub env_file: Option<PathBuf>,
}

/// What a conversion run produced.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub output_dir: PathBuf,
    /// Files copied to the output directory, sorted by name.
    pub files: Vec<PathBuf>,
    pub renames: Vec<RenameEvent>,
}

/// Runs the conversion tool and every post-processing step.
pub struct Pipeline<'a> {
    generator: &'a dyn QuadletGenerator,
    config: &'a ProjectConfig,
}

impl<'a> Pipeline<'a> {
    pub fn new(generator: &'a dyn QuadletGenerator, config: &'a ProjectConfig) -> Self {
        Self { generator, config }
    }

    /// Convert a Compose file and copy the processed units to the output
    /// directory.
    pub fn convert(&self, request: &ConvertRequest) -> CoreResult<ConversionSummary> {
        if self.config.env_file().is_none() {
            return Err(CoreError::MissingEnvFile);
        }
        if request.service_name.is_empty() {
            return Err(CoreError::MissingServiceName);
        }

        let build = self.stage(&request.compose_file)?;
        let result = self.process_build(build.path(), request);
        if let Err(e) = &result {
            debug!("Conversion failed, removing build directory {:?}: {}", build.path(), e);
        }

        Self::cleanup(build);
        result
    }

    /// Post-process the staged units and copy them to the output directory.
    fn process_build(
        &self,
        build_dir: &Path,
        request: &ConvertRequest,
    ) -> CoreResult<ConversionSummary> {
        let env_file = build_dir.join(ENV_FILE_NAME);
        if let Some(source) = &request.env_file {
            debug!("Seeding env file from {:?}", source);
            fs::copy(source, &env_file).map_err(|e| CoreError::fs("copy", source, e))?;
        }

        if !request.output_dir.exists() {
            fs::create_dir_all(&request.output_dir)
                .map_err(|e| CoreError::fs("create", &request.output_dir, e))?;
        }

        write_network_unit(build_dir, &request.service_name)?;

        let processor = UnitPostProcessor::new(self.config, &env_file);
        for unit_path in list_units(build_dir, CONTAINER_EXTENSION)? {
            processor.process(&unit_path)?;

            let mut unit = UnitFile::read(&unit_path)?;
            attach_network(&mut unit, &request.service_name);
            unit.write(&unit_path)?;
        }

        let containers = list_units(build_dir, CONTAINER_EXTENSION)?;
        let renames =
            UnitRenamer::new(self.config, &request.service_name).rename_batch(&containers)?;

        let files = Self::copy_outputs(build_dir, &request.output_dir)?;
        info!("Wrote {} files to {:?}", files.len(), request.output_dir);

        Ok(ConversionSummary {
            output_dir: request.output_dir.clone(),
            files,
            renames,
        })
    }

    /// Convert a Compose file and render the volume table of every container
    /// unit, without writing any output.
    pub fn generate_config(&self, compose_file: &Path) -> CoreResult<String> {
        let build = self.stage(compose_file)?;

        let mut tables = String::new();
        for unit_path in list_units(build.path(), CONTAINER_EXTENSION)? {
            tables.push_str(&volume_table(&unit_path)?);
        }

        Self::cleanup(build);
        Ok(tables)
    }

    /// Create the build directory and run the conversion tool into it.
    fn stage(&self, compose_file: &Path) -> CoreResult<TempDir> {
        let build = tempfile::Builder::new()
            .prefix(BUILD_DIR_PREFIX)
            .tempdir()
            .map_err(|e| CoreError::fs("create", std::env::temp_dir(), e))?;
        debug!("Staging build directory {:?}", build.path());

        info!("Converting {:?} with {}", compose_file, self.generator.name());
        let output = self
            .generator
            .generate(compose_file, build.path())
            .map_err(|e| {
                debug!("Conversion failed, removing build directory {:?}: {}", build.path(), e);
                e
            })?;
        if !output.stderr.is_empty() {
            debug!("{} stderr: {}", self.generator.name(), output.stderr.trim_end());
        }
        Ok(build)
    }

    fn copy_outputs(build_dir: &Path, output_dir: &Path) -> CoreResult<Vec<PathBuf>> {
        let mut copied = Vec::new();
        for file in list_files(build_dir)? {
            let Some(name) = file.file_name() else {
                continue;
            };
            let destination = output_dir.join(name);
            fs::copy(&file, &destination).map_err(|e| CoreError::fs("copy", &file, e))?;
            copied.push(destination);
        }
        Ok(copied)
    }

    fn cleanup(build: TempDir) {
        let path = build.path().to_path_buf();
        if let Err(e) = build.close() {
            warn!("Failed to remove build directory {:?}: {}", path, e);
        }
    }
}
