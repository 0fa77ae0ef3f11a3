//! Generate-config mode - print volume tables for a new dnalet.toml.

use anyhow::{Context, Result};

use dnalet_core::Pipeline;
use dnalet_runner::PodletCli;

use super::ConvertArgs;

pub fn execute(args: &ConvertArgs) -> Result<()> {
    let config = args.load_config()?;
    let podlet = PodletCli::with_program(&args.podlet);

    let tables = Pipeline::new(&podlet, &config)
        .generate_config(&args.compose_file)
        .with_context(|| format!("Failed to convert {:?}", args.compose_file))?;

    print!("{}", tables);
    Ok(())
}
