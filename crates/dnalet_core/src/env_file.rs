//! Shared env file accumulation.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// Append a unit's environment variables to the shared env file.
///
/// The block is preceded by a `# Variables from <unit>` comment. The file is
/// opened in append mode, created when missing, and flushed and closed before
/// returning. Nothing is written when `variables` is empty.
pub fn append_variables(env_file: &Path, unit_name: &str, variables: &[String]) -> CoreResult<()> {
    if variables.is_empty() {
        return Ok(());
    }

    debug!("Appending {} variables from {} to {:?}", variables.len(), unit_name, env_file);

    let to_error = |source| CoreError::fs("append to", env_file, source);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(env_file)
        .map_err(to_error)?;

    let mut writer = BufWriter::new(file);
    writeln!(writer).map_err(to_error)?;
    writeln!(writer, "# Variables from {}", unit_name).map_err(to_error)?;
    for variable in variables {
        writeln!(writer, "{}", variable).map_err(to_error)?;
    }
    writer.flush().map_err(to_error)?;
    Ok(())
}
