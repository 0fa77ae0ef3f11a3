//! CLI argument definitions.
//!
//! dnalet has a single command: convert a Compose file, or with
//! `--generate-config` print the volume tables for a new `dnalet.toml`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser};

use dnalet_config::{ProjectConfig, DEFAULT_CONFIG_FILE};

pub mod convert;
pub mod generate_config;

/// dnalet - Compose to Quadlet conversion for Ansible roles
#[derive(Parser)]
#[command(name = "dnalet")]
#[command(version, about = "Convert a Compose file into Quadlet units for an Ansible role")]
#[command(long_about = r#"
dnalet runs podlet on a Compose file and prepares the generated Quadlet units
for deployment from an Ansible role:

  - Environment= lines move into a shared env file
  - Volume= host paths are rewritten from dnalet.toml
  - every container joins a shared <service>.network
  - units are renamed per dnalet.toml, fixing Requires=/After= references

Use --generate-config to print [container.<name>.volumes] tables to start a
dnalet.toml from.

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Configuration error
  4 - Conversion tool failure
"#)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(flatten)]
    pub args: ConvertArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Compose file to convert
    pub compose_file: PathBuf,

    /// Env file to include in the shared env file
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Service name (network name, rename prefix and role name)
    #[arg(long)]
    pub service_name: Option<String>,

    /// Roles directory (defaults to ./roles when it exists)
    #[arg(long)]
    pub roles: Option<PathBuf>,

    /// Output directory (defaults to <roles>/<service-name>/templates)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Project configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, env = "DNALET_CONFIG")]
    pub config: PathBuf,

    /// Print volume tables for dnalet.toml instead of converting
    #[arg(long)]
    pub generate_config: bool,

    /// podlet binary to run
    #[arg(long, default_value = "podlet", env = "DNALET_PODLET")]
    pub podlet: String,
}

impl ConvertArgs {
    pub fn load_config(&self) -> Result<ProjectConfig> {
        ProjectConfig::load(&self.config)
            .with_context(|| format!("Failed to load project configuration {:?}", self.config))
    }
}
