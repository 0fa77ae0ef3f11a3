//! Volume tables for bootstrapping a project configuration.
//!
//! For each container unit this prints the inverse of the rewrite table that
//! `dnalet.toml` expects, so users can copy it and edit the host side.

use std::path::Path;

use tracing::debug;

use dnalet_unit::UnitFile;

use crate::error::CoreResult;
use crate::paths::unit_stem;
use crate::quadlet;

/// Quote a string the way TOML expects.
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

/// A table key segment, quoted unless it is a valid bare key.
fn toml_key(key: &str) -> String {
    let bare = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if bare {
        key.to_string()
    } else {
        toml_string(key)
    }
}

/// Render the `[container.<unit>.volumes]` table of a parsed unit.
///
/// Each `Volume=` becomes `"<containerPath>" = "<hostPath>"`; any flags after
/// the container path are dropped and values without a colon are skipped.
pub fn render_volume_table(unit_name: &str, unit: &UnitFile) -> String {
    let mut out = format!("[container.{}.volumes]\n", toml_key(unit_name));
    for volume in unit.get_values(quadlet::CONTAINER, quadlet::VOLUME) {
        let mut segments = volume.split(':');
        match (segments.next(), segments.next()) {
            (Some(host_path), Some(container_path)) => {
                out.push_str(&format!(
                    "{} = {}\n",
                    toml_string(container_path),
                    toml_string(host_path)
                ));
            }
            _ => debug!("Skipping volume without container path: {}", volume),
        }
    }
    out.push('\n');
    out
}

/// Read a container unit and render its volume table.
pub fn volume_table(unit_path: &Path) -> CoreResult<String> {
    let unit = UnitFile::read(unit_path)?;
    Ok(render_volume_table(unit_stem(unit_path)?, &unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_volume_table() {
        let unit = UnitFile::parse(
            "[Container]\nImage=postgres\nVolume=./pgdata:/var/lib/postgresql/data\nVolume=./init:/docker-entrypoint-initdb.d:ro\nVolume=anonymous\n",
        );

        assert_eq!(
            render_volume_table("db", &unit),
            "[container.db.volumes]\n\
             \"/var/lib/postgresql/data\" = \"./pgdata\"\n\
             \"/docker-entrypoint-initdb.d\" = \"./init\"\n\n"
        );
    }

    #[test]
    fn test_unit_without_volumes_gets_empty_table() {
        let unit = UnitFile::parse("[Container]\nImage=redis\n");
        assert_eq!(render_volume_table("cache", &unit), "[container.cache.volumes]\n\n");
    }

    #[test]
    fn test_dotted_unit_name_is_quoted() {
        let unit = UnitFile::new();
        assert_eq!(
            render_volume_table("web.v2", &unit),
            "[container.\"web.v2\".volumes]\n\n"
        );
    }
}
