//! Batch renaming of container units with dependency reference patching.
//!
//! Renaming `db.container` changes the systemd service it generates from
//! `db.service` to `<new>.service`, so every sibling's `Requires=` and
//! `After=` tokens naming the old service are rewritten in the same pass.
//! Renames already applied are not rolled back when a later step fails.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use dnalet_config::ProjectConfig;
use dnalet_unit::{UnitFile, CONTAINER_EXTENSION, SERVICE_EXTENSION};

use crate::error::{CoreError, CoreResult};
use crate::paths::unit_stem;
use crate::quadlet;

/// One applied rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEvent {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Service name siblings referenced before the rename.
    pub old_service: String,
    /// Service name siblings reference now.
    pub new_service: String,
    /// Siblings whose references were rewritten.
    pub patched: Vec<PathBuf>,
}

/// Replace `old_service` tokens in `Unit.Requires` and `Unit.After`.
///
/// Every value of both keys is split on whitespace and rejoined with single
/// spaces. Returns whether any token changed; the unit is only modified then.
pub fn patch_references(unit: &mut UnitFile, old_service: &str, new_service: &str) -> bool {
    let mut changed = false;
    for key in [quadlet::REQUIRES, quadlet::AFTER] {
        let values = unit.get_values(quadlet::UNIT, key);
        if !values
            .iter()
            .any(|v| v.split_whitespace().any(|token| token == old_service))
        {
            continue;
        }

        let patched: Vec<String> = values
            .iter()
            .map(|value| {
                value
                    .split_whitespace()
                    .map(|token| if token == old_service { new_service } else { token })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        unit.set_values(quadlet::UNIT, key, patched);
        changed = true;
    }
    changed
}

/// Applies `container.<unit>.name` directives to a batch of units.
pub struct UnitRenamer<'a> {
    config: &'a ProjectConfig,
    service_name: &'a str,
}

impl<'a> UnitRenamer<'a> {
    pub fn new(config: &'a ProjectConfig, service_name: &'a str) -> Self {
        Self {
            config,
            service_name,
        }
    }

    /// Rename every unit of `units` that has a directive.
    ///
    /// Units are visited in the given order. Each renamed unit leaves the set
    /// of live siblings and rejoins it under its new name, so later renames
    /// still patch its references but it is never renamed twice.
    pub fn rename_batch(&self, units: &[PathBuf]) -> CoreResult<Vec<RenameEvent>> {
        let mut live: Vec<PathBuf> = units.to_vec();
        let mut events = Vec::new();

        for source in units {
            let original = unit_stem(source)?;
            let Some(directive) = self.config.rename_directive(original) else {
                continue;
            };

            let target_name = directive.target_file_name(self.service_name, original);
            let target = source.with_file_name(&target_name);
            let target_stem = target_name
                .strip_suffix(&format!(".{}", CONTAINER_EXTENSION))
                .unwrap_or(&target_name);

            let old_service = format!("{}.{}", original, SERVICE_EXTENSION);
            let new_service = format!("{}.{}", target_stem, SERVICE_EXTENSION);

            if target != *source && target.exists() {
                warn!("Renaming {:?} replaces existing unit {:?}", source, target);
            }

            live.retain(|path| path != source && *path != target);
            fs::rename(source, &target).map_err(|e| CoreError::fs("rename", source, e))?;
            info!("{} => {}", old_service, new_service);

            let mut patched = Vec::new();
            for sibling in &live {
                if Self::patch_file(sibling, &old_service, &new_service)? {
                    patched.push(sibling.clone());
                }
            }

            live.push(target.clone());
            events.push(RenameEvent {
                source: source.clone(),
                target,
                old_service,
                new_service,
                patched,
            });
        }

        Ok(events)
    }

    fn patch_file(path: &Path, old_service: &str, new_service: &str) -> CoreResult<bool> {
        let mut unit = UnitFile::read(path)?;
        if !patch_references(&mut unit, old_service, new_service) {
            return Ok(false);
        }

        debug!("Patched references to {} in {:?}", old_service, path);
        unit.write(path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_replaces_exact_tokens_only() {
        let mut unit = UnitFile::parse(
            "[Unit]\nRequires=db.service  cache.service\nAfter=network-online.target db.service\n",
        );

        assert!(patch_references(&mut unit, "db.service", "app-db.service"));
        assert_eq!(unit.get("Unit", "Requires"), Some("app-db.service cache.service"));
        assert_eq!(
            unit.get("Unit", "After"),
            Some("network-online.target app-db.service")
        );
    }

    #[test]
    fn test_patch_ignores_prefix_matches() {
        let mut unit = UnitFile::parse("[Unit]\nRequires=db.service.bak mydb.service\n");

        assert!(!patch_references(&mut unit, "db.service", "x.service"));
        assert_eq!(unit.get("Unit", "Requires"), Some("db.service.bak mydb.service"));
    }

    #[test]
    fn test_patch_keeps_every_value() {
        let mut unit = UnitFile::parse("[Unit]\nAfter=a.service\nAfter=db.service\n");

        assert!(patch_references(&mut unit, "db.service", "app-db.service"));
        assert_eq!(unit.get_values("Unit", "After"), ["a.service", "app-db.service"]);
    }

    #[test]
    fn test_patch_without_fields_does_nothing() {
        let mut unit = UnitFile::parse("[Container]\nImage=nginx\n");

        assert!(!patch_references(&mut unit, "db.service", "app-db.service"));
        assert!(!unit.has_section("Unit"));
    }
}
