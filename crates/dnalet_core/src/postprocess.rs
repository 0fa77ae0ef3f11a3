//! Per-unit post-processing of generated container units.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use dnalet_config::{ProjectConfig, VolumeRewrites};
use dnalet_unit::UnitFile;

use crate::env_file::append_variables;
use crate::error::{CoreError, CoreResult};
use crate::paths::unit_stem;
use crate::quadlet;

/// Rewrite one `hostPath:containerPath` volume spec.
///
/// Returns the new spec when the rewrite table has an entry for the volume's
/// container path. The table value is `newHostPath:flags`, giving
/// `newHostPath:containerPath:flags`. Specs that do not split into exactly two
/// segments are never rewritten.
pub fn rewrite_volume(volume: &str, rewrites: &VolumeRewrites) -> Option<String> {
    let segments: Vec<&str> = volume.split(':').collect();
    let [_, container_path] = segments[..] else {
        if !rewrites.is_empty() {
            warn!("Skipping volume {:?}: expected hostPath:containerPath", volume);
        }
        return None;
    };

    let replacement = rewrites.get(container_path)?;
    let rewritten = match replacement.split_once(':') {
        Some((host_path, flags)) => format!("{}:{}:{}", host_path, container_path, flags),
        None => format!("{}:{}", replacement, container_path),
    };
    Some(rewritten)
}

/// Rewrite every `Container.Volume` value in place. Returns how many changed.
pub fn rewrite_volumes(unit: &mut UnitFile, rewrites: &VolumeRewrites) -> usize {
    if rewrites.is_empty() {
        return 0;
    }

    let mut changed = 0;
    let volumes: Vec<String> = unit
        .get_values(quadlet::CONTAINER, quadlet::VOLUME)
        .iter()
        .map(|volume| match rewrite_volume(volume, rewrites) {
            Some(rewritten) => {
                debug!("Volume {} => {}", volume, rewritten);
                changed += 1;
                rewritten
            }
            None => volume.clone(),
        })
        .collect();

    if changed > 0 {
        unit.set_values(quadlet::CONTAINER, quadlet::VOLUME, volumes);
    }
    changed
}

/// Moves environment variables out of container units, rewrites their
/// volumes and points them at the shared env file.
pub struct UnitPostProcessor<'a> {
    config: &'a ProjectConfig,
    env_file: PathBuf,
}

impl<'a> UnitPostProcessor<'a> {
    /// `env_file` is the local file variables are collected into; the path
    /// written into units comes from `general.env_file`.
    pub fn new(config: &'a ProjectConfig, env_file: impl Into<PathBuf>) -> Self {
        Self {
            config,
            env_file: env_file.into(),
        }
    }

    /// Process one container unit file in place.
    ///
    /// Fails with [`CoreError::MissingEnvFile`] before touching any file when
    /// `general.env_file` is not configured.
    pub fn process(&self, unit_path: &Path) -> CoreResult<()> {
        let deployed_env_file = self.config.env_file().ok_or(CoreError::MissingEnvFile)?;
        let name = unit_stem(unit_path)?;
        info!("Processing {}", name);

        let mut unit = UnitFile::read(unit_path)?;

        let variables = unit.delete_key(quadlet::CONTAINER, quadlet::ENVIRONMENT);
        append_variables(&self.env_file, name, &variables)?;

        let rewrites = self.config.volume_rewrites(name);
        let rewritten = rewrite_volumes(&mut unit, &rewrites);
        debug!("{}: moved {} variables, rewrote {} volumes", name, variables.len(), rewritten);

        unit.set(quadlet::CONTAINER, quadlet::ENVIRONMENT_FILE, deployed_env_file);
        unit.write(unit_path)?;
        Ok(())
    }
}
