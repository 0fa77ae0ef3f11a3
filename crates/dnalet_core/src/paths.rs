//! Path helpers: unit discovery, unit names and output directory resolution.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{CoreError, CoreResult};

/// Directory name of the Ansible role template folder.
const TEMPLATES_DIR: &str = "templates";

/// Default roles directory looked up next to the working directory.
const ROLES_DIR: &str = "roles";

/// Base name of a unit file (`web` for `web.container`).
pub fn unit_stem(path: &Path) -> CoreResult<&str> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CoreError::InvalidUnitPath(path.to_path_buf()))
}

/// Regular files directly inside `dir`, sorted by file name.
pub fn list_files(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Files directly inside `dir` with the given extension, sorted by file name.
pub fn list_units(dir: &Path, extension: &str) -> CoreResult<Vec<PathBuf>> {
    Ok(list_files(dir)?
        .into_iter()
        .filter(|p| p.extension().map_or(false, |ext| ext == extension))
        .collect())
}

/// The roles directory: `requested` when it exists, else `<cwd>/roles` when
/// that exists.
pub fn role_directory(requested: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = requested {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let default = cwd.join(ROLES_DIR);
    default.exists().then_some(default)
}

/// Where converted units are copied.
///
/// An explicit output directory wins; otherwise the role's `templates`
/// directory is used when both a roles directory and a service name exist.
pub fn resolve_output_dir(
    output: Option<&Path>,
    roles: Option<&Path>,
    service_name: Option<&str>,
    cwd: &Path,
) -> CoreResult<PathBuf> {
    if let Some(output) = output {
        return Ok(output.to_path_buf());
    }

    match (role_directory(roles, cwd), service_name) {
        (Some(roles), Some(service)) => Ok(roles.join(service).join(TEMPLATES_DIR)),
        _ => Err(CoreError::NoOutputDirectory),
    }
}
