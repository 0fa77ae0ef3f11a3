//! Convert command - Compose file to role-ready Quadlet units.

use anyhow::{Context, Result};
use tracing::info;

use dnalet_core::{resolve_output_dir, ConvertRequest, CoreError, Pipeline};
use dnalet_runner::PodletCli;

use super::ConvertArgs;

pub fn execute(args: &ConvertArgs) -> Result<()> {
    let config = args.load_config()?;

    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let output_dir = resolve_output_dir(
        args.output.as_deref(),
        args.roles.as_deref(),
        args.service_name.as_deref(),
        &cwd,
    )?;
    let service_name = args
        .service_name
        .clone()
        .ok_or(CoreError::MissingServiceName)?;

    info!("Converting {:?} into {:?}", args.compose_file, output_dir);

    let podlet = PodletCli::with_program(&args.podlet);
    let pipeline = Pipeline::new(&podlet, &config);
    let summary = pipeline
        .convert(&ConvertRequest {
            compose_file: args.compose_file.clone(),
            service_name,
            output_dir,
            env_file: args.env_file.clone(),
        })
        .with_context(|| format!("Failed to convert {:?}", args.compose_file))?;

    for rename in &summary.renames {
        println!("{} => {}", rename.old_service, rename.new_service);
    }
    println!(
        "✅ Wrote {} files to {}",
        summary.files.len(),
        summary.output_dir.display()
    );

    Ok(())
}
