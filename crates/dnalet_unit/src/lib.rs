//! # dnalet_unit
//!
//! Reading and writing of Quadlet/systemd-style unit files.
//!
//! Unit files are flat `[Section]` blocks of `Key=Value` lines where a key may
//! repeat inside a section (`Volume=`, `Environment=`, ...). The order and
//! multiplicity of those repeated values is meaningful, so [`UnitFile`] keeps
//! every value of every key in the order it was read.
//!
//! ## Example
//!
//! ```rust
//! use dnalet_unit::UnitFile;
//!
//! let mut unit = UnitFile::parse("[Container]\nVolume=/a:/b\nVolume=/c:/d\n");
//! assert_eq!(unit.get_values("Container", "Volume").len(), 2);
//! assert_eq!(unit.get("Container", "Volume"), Some("/c:/d"));
//!
//! unit.set("Container", "Network", "app.network");
//! assert!(unit.render().contains("Network=app.network"));
//! ```

pub mod error;
pub mod unit;

pub use error::{UnitError, UnitResult};
pub use unit::{Section, UnitFile};

/// Extension of container units produced by the conversion tool.
pub const CONTAINER_EXTENSION: &str = "container";

/// Extension of network units.
pub const NETWORK_EXTENSION: &str = "network";

/// Extension systemd uses for the services generated from Quadlet units.
pub const SERVICE_EXTENSION: &str = "service";
