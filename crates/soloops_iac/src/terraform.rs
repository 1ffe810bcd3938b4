//! Terraform execution against generated artifacts.
//!
//! The binary runs as a child process in the artifact directory with the
//! caller's standard streams, so the user sees Terraform's own output and can
//! interrupt it. Only the exit status is inspected.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Arc;

use tracing::{debug, info};

use crate::confirm::{Confirmation, ConfirmRequest};
use crate::error::{IacError, IacResult};

/// Default name of the provisioning binary.
pub const DEFAULT_TERRAFORM_BIN: &str = "terraform";

/// Something that can run the provisioning tool.
pub trait ToolRunner: Send + Sync {
    /// Run the tool with `args` inside `working_dir`, failing on non-zero exit.
    fn run(&self, working_dir: &Path, args: &[&str]) -> IacResult<()>;
}

/// Runs a locally installed Terraform binary.
#[derive(Debug, Clone)]
pub struct TerraformCli {
    binary: String,
}

impl Default for TerraformCli {
    fn default() -> Self {
        Self::new()
    }
}

impl TerraformCli {
    pub fn new() -> Self {
        Self {
            binary: DEFAULT_TERRAFORM_BIN.to_string(),
        }
    }

    /// Use a different binary name or path (e.g. `tofu`).
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }
}

impl ToolRunner for TerraformCli {
    fn run(&self, working_dir: &Path, args: &[&str]) -> IacResult<()> {
        debug!("Executing {} {:?} in {:?}", self.binary, args, working_dir);

        let status = Command::new(&self.binary)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| IacError::ToolLaunch {
                tool: self.binary.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(IacError::ToolFailed {
                command: format!("{} {}", self.binary, args.first().unwrap_or(&"")),
                code: status.code(),
            })
        }
    }
}

/// How a gated operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The confirmation policy declined; nothing was changed.
    Aborted,
}

/// Drives preview, apply and destroy against an artifact directory.
pub struct Provisioner {
    runner: Arc<dyn ToolRunner>,
    confirmation: Arc<dyn Confirmation>,
    infra_dir: PathBuf,
}

impl Provisioner {
    pub fn new(
        runner: Arc<dyn ToolRunner>,
        confirmation: Arc<dyn Confirmation>,
        infra_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            runner,
            confirmation,
            infra_dir: infra_dir.into(),
        }
    }

    /// Initialize and show the execution plan.
    pub fn preview(&self) -> IacResult<()> {
        self.ensure_infra_dir()?;

        info!("Initializing Terraform in {:?}", self.infra_dir);
        self.runner.run(&self.infra_dir, &["init", "-input=false"])?;

        info!("Planning infrastructure changes");
        self.runner.run(&self.infra_dir, &["plan"])
    }

    /// Initialize, confirm, then apply.
    ///
    /// Initialization runs before the confirmation so that provider download
    /// problems surface before the user is asked anything.
    pub fn apply(&self) -> IacResult<Outcome> {
        self.ensure_infra_dir()?;

        info!("Initializing Terraform in {:?}", self.infra_dir);
        self.runner.run(&self.infra_dir, &["init"])?;

        if !self.confirmation.confirm(&ConfirmRequest::APPLY)? {
            info!("Apply declined");
            return Ok(Outcome::Aborted);
        }

        info!("Applying infrastructure changes");
        self.runner.run(&self.infra_dir, &self.gated_args("apply"))?;
        Ok(Outcome::Completed)
    }

    /// Confirm, then destroy everything in the state.
    pub fn destroy(&self) -> IacResult<Outcome> {
        self.ensure_infra_dir()?;

        if !self.confirmation.confirm(&ConfirmRequest::DESTROY)? {
            info!("Destroy declined");
            return Ok(Outcome::Aborted);
        }

        info!("Destroying infrastructure");
        self.runner.run(&self.infra_dir, &self.gated_args("destroy"))?;
        Ok(Outcome::Completed)
    }

    fn gated_args(&self, subcommand: &'static str) -> Vec<&'static str> {
        let mut args = vec![subcommand];
        if self.confirmation.is_automatic() {
            args.push("-auto-approve");
        }
        args
    }

    fn ensure_infra_dir(&self) -> IacResult<()> {
        if self.infra_dir.is_dir() {
            Ok(())
        } else {
            Err(IacError::ArtifactDirMissing(self.infra_dir.clone()))
        }
    }
}
