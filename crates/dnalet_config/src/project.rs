//! Project configuration file model and lookups.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::rename::RenameDirective;

/// File name looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "dnalet.toml";

/// Container path to `hostPath:flags` replacement table of one unit.
pub type VolumeRewrites = IndexMap<String, String>;

/// `[general]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralSettings {
    /// Env file path written into every container unit.
    pub env_file: Option<String>,
}

/// `[container.<unit>]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContainerSettings {
    /// Rename directive: `<auto>` or an explicit unit name.
    pub name: Option<String>,
    /// Container path to `hostPath:flags`.
    #[serde(default)]
    pub volumes: VolumeRewrites,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ProjectDocument {
    general: Option<GeneralSettings>,
    #[serde(default)]
    container: IndexMap<String, ContainerSettings>,
}

/// Loaded project configuration.
///
/// An empty configuration answers every lookup with an absent result.
#[derive(Debug, Clone, Default)]
pub struct ProjectConfig {
    doc: Option<ProjectDocument>,
}

impl ProjectConfig {
    /// Configuration with no document loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a configuration file. A missing file yields an empty configuration.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Config file {:?} not found, continuing without project configuration", path);
            return Ok(Self::empty());
        }

        debug!("Reading config from {:?}", path);
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let doc = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { doc: Some(doc) })
    }

    /// Parse configuration content held in memory.
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let doc = toml::from_str(content)?;
        Ok(Self { doc: Some(doc) })
    }

    pub fn is_loaded(&self) -> bool {
        self.doc.is_some()
    }

    /// Volume rewrites configured for a unit; empty when none are.
    pub fn volume_rewrites(&self, unit_name: &str) -> VolumeRewrites {
        self.container(unit_name)
            .map(|c| c.volumes.clone())
            .unwrap_or_default()
    }

    /// `general.env_file`, if set.
    pub fn env_file(&self) -> Option<&str> {
        self.doc
            .as_ref()?
            .general
            .as_ref()?
            .env_file
            .as_deref()
    }

    /// Rename directive configured for a unit.
    pub fn rename_directive(&self, unit_name: &str) -> Option<RenameDirective> {
        self.container(unit_name)?
            .name
            .as_deref()
            .map(RenameDirective::from_value)
    }

    /// Raw `[container.<unit>]` settings.
    pub fn container(&self, unit_name: &str) -> Option<&ContainerSettings> {
        self.doc.as_ref()?.container.get(unit_name)
    }
}
