//! # dnalet_config
//!
//! Read-only access to the project configuration file (`dnalet.toml`).
//!
//! The file drives three per-run decisions:
//!
//! - **Env file**: `general.env_file`, the path every container unit points
//!   its `EnvironmentFile=` at
//! - **Volume rewrites**: `container.<unit>.volumes`, mapping a container path
//!   to the `hostPath:flags` pair that should back it
//! - **Renames**: `container.<unit>.name`, either `<auto>` or an explicit unit name
//!
//! Every lookup tolerates missing tables and returns an empty result.
//!
//! ## Example
//!
//! ```rust
//! use dnalet_config::{ProjectConfig, RenameDirective};
//!
//! let config = ProjectConfig::parse(r#"
//! [general]
//! env_file = "/etc/app/app.env"
//!
//! [container.db]
//! name = "<auto>"
//! "#).unwrap();
//!
//! assert_eq!(config.env_file(), Some("/etc/app/app.env"));
//! assert_eq!(config.rename_directive("db"), Some(RenameDirective::Auto));
//! assert!(config.volume_rewrites("web").is_empty());
//! ```

pub mod error;
pub mod project;
pub mod rename;

pub use error::{ConfigError, ConfigResult};
pub use project::{ContainerSettings, GeneralSettings, ProjectConfig, VolumeRewrites, DEFAULT_CONFIG_FILE};
pub use rename::{RenameDirective, AUTO_MARKER};
