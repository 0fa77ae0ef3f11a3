//! # dnalet_core
//!
//! Turns the raw Quadlet units produced from a Compose file into units ready
//! to ship inside an Ansible role.
//!
//! # Architecture
//!
//! - **Post-processing**: moves `Environment=` lines into a shared env file,
//!   rewrites `Volume=` host paths and points the unit at the shared env file
//! - **Network**: writes the shared `<service>.network` unit and attaches
//!   every container to it
//! - **Renaming**: renames container units per the project configuration and
//!   patches `Requires=`/`After=` references in their siblings
//! - **Volume tables**: prints `[container.<unit>.volumes]` tables to
//!   bootstrap a project configuration
//! - **Pipeline**: stages a build directory, runs the conversion tool and
//!   the steps above, then copies the result to the output directory
//!
//! # Example
//!
//! ```rust,no_run
//! use dnalet_config::ProjectConfig;
//! use dnalet_core::{ConvertRequest, Pipeline};
//! use dnalet_runner::PodletCli;
//!
//! let config = ProjectConfig::load("dnalet.toml")?;
//! let podlet = PodletCli::new();
//! let pipeline = Pipeline::new(&podlet, &config);
//!
//! let summary = pipeline.convert(&ConvertRequest {
//!     compose_file: "compose.yaml".into(),
//!     service_name: "app".into(),
//!     output_dir: "roles/app/templates".into(),
//!     env_file: None,
//! })?;
//! println!("{} files written", summary.files.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod env_file;
pub mod error;
pub mod network;
pub mod paths;
pub mod pipeline;
pub mod postprocess;
pub mod quadlet;
pub mod rename;
pub mod volumes;

pub use env_file::append_variables;
pub use error::{CoreError, CoreResult};
pub use network::{attach_network, network_file_name, network_unit, write_network_unit, START_TIMEOUT_SECS};
pub use paths::{list_files, list_units, resolve_output_dir, role_directory, unit_stem};
pub use pipeline::{ConversionSummary, ConvertRequest, Pipeline};
pub use postprocess::{rewrite_volume, rewrite_volumes, UnitPostProcessor};
pub use rename::{patch_references, RenameEvent, UnitRenamer};
pub use volumes::{render_volume_table, volume_table};
