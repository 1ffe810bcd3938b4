//! SoloOps CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments or unknown environment
//! - 3: Validation failure
//! - 5: IaC error (generation or Terraform)

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use soloops_iac::IacError;
use soloops_manifest::ManifestError;

mod commands;

use commands::{Cli, Commands, GlobalOptions};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const IAC_ERROR: u8 = 5;
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.global);

    let result = match cli.command {
        Commands::Init => commands::init::execute(&cli.global),
        Commands::Validate(args) => commands::validate::execute(args, &cli.global),
        Commands::Generate => commands::generate::execute(&cli.global),
        Commands::Preview => commands::preview::execute(&cli.global),
        Commands::Apply(args) => commands::apply::execute(args, &cli.global),
        Commands::Destroy(args) => commands::destroy::execute(args, &cli.global),
        Commands::Version => commands::version::execute(),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Logs go to stderr so command output on stdout stays scriptable.
///
/// `-v`/`-q` pick the level for SoloOps crates; otherwise `RUST_LOG` applies,
/// falling back to `soloops=info`.
fn init_logging(global: &GlobalOptions) {
    let filter = match global.log_level() {
        Some(level) => EnvFilter::new(format!("warn,soloops={}", level)),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,soloops=info")),
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(err) = cause.downcast_ref::<ManifestError>() {
            return manifest_exit_code(err);
        }
        if let Some(err) = cause.downcast_ref::<IacError>() {
            return match err {
                IacError::Confirmation(_) => ExitCodes::GENERAL_ERROR,
                _ => ExitCodes::IAC_ERROR,
            };
        }
    }
    ExitCodes::GENERAL_ERROR
}

fn manifest_exit_code(err: &ManifestError) -> u8 {
    match err {
        ManifestError::Validation(_) | ManifestError::Yaml(_) => ExitCodes::VALIDATION_FAILURE,
        ManifestError::EnvironmentNotFound(_) => ExitCodes::INVALID_ARGS,
        _ => ExitCodes::GENERAL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_categorize_wrapped_errors() {
        let err = Err::<(), _>(ManifestError::Validation("project name is required".into()))
            .context("validation failed")
            .unwrap_err();
        assert_eq!(categorize_error(&err), ExitCodes::VALIDATION_FAILURE);

        let err = anyhow::Error::new(ManifestError::EnvironmentNotFound("qa".into()));
        assert_eq!(categorize_error(&err), ExitCodes::INVALID_ARGS);

        let err = anyhow::Error::new(IacError::ToolFailed {
            command: "terraform apply".into(),
            code: Some(1),
        });
        assert_eq!(categorize_error(&err), ExitCodes::IAC_ERROR);

        assert_eq!(
            categorize_error(&anyhow::anyhow!("something else")),
            ExitCodes::GENERAL_ERROR
        );
    }
}
