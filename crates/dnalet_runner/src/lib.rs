//! # dnalet_runner
//!
//! Wrapper around the external tool that converts a Compose file into Quadlet
//! unit files.
//!
//! # Features
//!
//! - **Generator Trait**: [`QuadletGenerator`] is the seam the pipeline calls
//! - **Podlet CLI**: runs `podlet --file <dir> compose <file>` and checks its exit status
//! - **Mock Generator**: writes fixture units for tests without podlet installed
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use dnalet_runner::{PodletCli, QuadletGenerator};
//!
//! let podlet = PodletCli::new();
//! let output = podlet
//!     .generate(Path::new("compose.yaml"), Path::new("/tmp/build"))
//!     .unwrap();
//! println!("{}", output.stdout);
//! ```

pub mod error;
pub mod generator;
pub mod mock;
pub mod podlet;

pub use error::{RunnerError, RunnerResult};
pub use generator::{GenerationOutput, QuadletGenerator};
pub use mock::{CapturedCall, MockGenerator};
pub use podlet::PodletCli;
