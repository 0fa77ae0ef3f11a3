//! Shared network unit and per-container network attachment.

use std::path::{Path, PathBuf};

use tracing::info;

use dnalet_unit::{UnitFile, NETWORK_EXTENSION};

use crate::error::CoreResult;
use crate::quadlet;

/// `Service.TimeoutStartSec` given to every container, leaving room for
/// image pulls on first start.
pub const START_TIMEOUT_SECS: u32 = 900;

/// `<service>.network`
pub fn network_file_name(service_name: &str) -> String {
    format!("{}.{}", service_name, NETWORK_EXTENSION)
}

/// The network unit shared by all containers of a service.
pub fn network_unit(service_name: &str) -> UnitFile {
    let mut unit = UnitFile::new();
    unit.set(
        quadlet::UNIT,
        quadlet::DESCRIPTION,
        format!("Network for {}", service_name),
    );
    unit.set(quadlet::NETWORK, quadlet::LABEL, format!("app={}", service_name));
    unit
}

/// Write the shared network unit into `dir` and return its path.
pub fn write_network_unit(dir: &Path, service_name: &str) -> CoreResult<PathBuf> {
    let path = dir.join(network_file_name(service_name));
    network_unit(service_name).write(&path)?;
    info!("Created network unit {:?}", path);
    Ok(path)
}

/// Join a container unit to the shared network and set its start timeout.
pub fn attach_network(unit: &mut UnitFile, service_name: &str) {
    unit.set(quadlet::CONTAINER, quadlet::NETWORK, network_file_name(service_name));
    unit.set(
        quadlet::SERVICE,
        quadlet::TIMEOUT_START_SEC,
        START_TIMEOUT_SECS.to_string(),
    );
}
