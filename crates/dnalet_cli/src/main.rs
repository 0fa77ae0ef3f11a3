//! dnalet CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Configuration error
//! - 4: Conversion tool failure

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::Cli;
use dnalet_core::CoreError;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const CONFIG_ERROR: u8 = 3;
    pub const CONVERSION_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_directives = if cli.verbose {
        "dnalet=debug,warn"
    } else if cli.quiet {
        "warn"
    } else {
        "dnalet=info,warn"
    };
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directives)),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = if cli.args.generate_config {
        commands::generate_config::execute(&cli.args)
    } else {
        commands::convert::execute(&cli.args)
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            eprintln!();
            eprintln!("{:?}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    let core = e.chain().find_map(|cause| cause.downcast_ref::<CoreError>());
    match core {
        Some(CoreError::NoOutputDirectory | CoreError::MissingServiceName) => ExitCodes::INVALID_ARGS,
        Some(err) if err.is_configuration() => ExitCodes::CONFIG_ERROR,
        Some(err) if err.is_conversion() => ExitCodes::CONVERSION_ERROR,
        _ if e.chain().any(|cause| cause.is::<dnalet_config::ConfigError>()) => {
            ExitCodes::CONFIG_ERROR
        }
        _ => ExitCodes::GENERAL_ERROR,
    }
}
