//! Quadlet section and key names.

pub const UNIT: &str = "Unit";
pub const CONTAINER: &str = "Container";
pub const SERVICE: &str = "Service";
pub const NETWORK: &str = "Network";

pub const REQUIRES: &str = "Requires";
pub const AFTER: &str = "After";
pub const DESCRIPTION: &str = "Description";
pub const ENVIRONMENT: &str = "Environment";
pub const ENVIRONMENT_FILE: &str = "EnvironmentFile";
pub const VOLUME: &str = "Volume";
pub const LABEL: &str = "Label";
pub const TIMEOUT_START_SEC: &str = "TimeoutStartSec";
