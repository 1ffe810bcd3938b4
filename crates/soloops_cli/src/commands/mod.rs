//! CLI command definitions.
//!
//! Global flags are collected into [`GlobalOptions`] and handed to each
//! command explicitly.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use soloops_iac::{
    AutoApprove, Confirmation, Prompt, Provisioner, TerraformCli, DEFAULT_INFRA_DIR,
    DEFAULT_TERRAFORM_BIN,
};
use soloops_manifest::{Manifest, ManifestLoader, ManifestValidator, DEFAULT_MANIFEST_FILE};

pub mod apply;
pub mod destroy;
pub mod generate;
pub mod init;
pub mod preview;
pub mod validate;
pub mod version;

/// SoloOps - Infrastructure blueprint management CLI
#[derive(Parser)]
#[command(name = "soloops")]
#[command(version, about = "SoloOps - Infrastructure blueprint management CLI")]
#[command(long_about = r#"
SoloOps scaffolds, validates, and manages infrastructure blueprints described
in a YAML manifest (soloops.yaml), and generates Terraform code from it.

WORKFLOWS:
  init      → Create a starter soloops.yaml
  validate  → Check the manifest for required fields and constraints
  generate  → Write Terraform files to infra/
  preview   → Show the Terraform plan
  apply     → Provision infrastructure (asks for confirmation)
  destroy   → Tear down infrastructure (asks for confirmation)

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments or unknown environment
  3 - Validation failure
  5 - IaC error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Path to soloops.yaml manifest
    #[arg(short = 'f', long = "file", global = true, env = "SOLOOPS_FILE", default_value = DEFAULT_MANIFEST_FILE)]
    pub manifest: PathBuf,

    /// Environment to target (defaults to first in manifest)
    #[arg(short, long = "env", global = true, env = "SOLOOPS_ENV")]
    pub environment: Option<String>,

    /// Directory for generated Terraform files
    #[arg(long, global = true, env = "SOLOOPS_INFRA_DIR", default_value = DEFAULT_INFRA_DIR)]
    pub infra_dir: PathBuf,

    /// Terraform binary to invoke
    #[arg(long, global = true, env = "SOLOOPS_TERRAFORM_BIN", default_value = DEFAULT_TERRAFORM_BIN)]
    pub terraform_bin: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl GlobalOptions {
    /// Log level requested on the command line, if any.
    pub fn log_level(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("warn")
        } else {
            None
        }
    }

    /// Load and validate the manifest.
    pub fn load_manifest(&self) -> Result<Manifest> {
        let manifest = ManifestLoader::load(&self.manifest).context("failed to load config")?;
        ManifestValidator::validate(&manifest).context("validation failed")?;
        Ok(manifest)
    }

    /// Build a provisioner for the artifact directory.
    ///
    /// `auto_approve` swaps the interactive prompt for blanket approval.
    pub fn provisioner(&self, auto_approve: bool) -> Provisioner {
        let confirmation: Arc<dyn Confirmation> = if auto_approve {
            Arc::new(AutoApprove)
        } else {
            Arc::new(Prompt::stdio())
        };
        let runner = TerraformCli::new().with_binary(&self.terraform_bin);
        Provisioner::new(Arc::new(runner), confirmation, &self.infra_dir)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new SoloOps project
    Init,

    /// Validate soloops.yaml configuration
    Validate(validate::ValidateArgs),

    /// Generate Terraform infrastructure code
    Generate,

    /// Preview infrastructure changes (terraform plan)
    Preview,

    /// Apply infrastructure changes
    Apply(apply::ApplyArgs),

    /// Destroy provisioned infrastructure
    Destroy(destroy::DestroyArgs),

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_defaults() {
        let cli = Cli::try_parse_from(["soloops", "generate"]).unwrap();
        assert_eq!(cli.global.manifest, PathBuf::from("soloops.yaml"));
        assert_eq!(cli.global.infra_dir, PathBuf::from("infra"));
        assert_eq!(cli.global.log_level(), None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "soloops", "apply", "--auto-approve", "-f", "custom.yaml", "-e", "staging", "-v",
        ])
        .unwrap();

        assert_eq!(cli.global.manifest, PathBuf::from("custom.yaml"));
        assert_eq!(cli.global.environment.as_deref(), Some("staging"));
        assert_eq!(cli.global.log_level(), Some("debug"));
        match cli.command {
            Commands::Apply(args) => assert!(args.auto_approve),
            _ => panic!("expected apply"),
        }
    }

    #[test]
    fn test_quiet_only_affects_logging() {
        let cmd = Cli::command();
        let quiet = cmd
            .get_arguments()
            .find(|arg| arg.get_id() == "quiet")
            .unwrap();
        assert_eq!(
            quiet.get_help().map(|h| h.to_string()).as_deref(),
            Some("Only log warnings and errors")
        );

        let cli = Cli::try_parse_from(["soloops", "validate", "-q"]).unwrap();
        assert_eq!(cli.global.log_level(), Some("warn"));
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["soloops", "validate", "-v", "-q"]).is_err());
    }
}
