//! Destroy command - Tear down provisioned infrastructure.

use anyhow::Result;
use clap::Args;

use soloops_iac::Outcome;

use super::GlobalOptions;

#[derive(Args)]
pub struct DestroyArgs {
    /// Skip the typed confirmation
    #[arg(long)]
    pub auto_approve: bool,
}

pub fn execute(args: DestroyArgs, global: &GlobalOptions) -> Result<()> {
    match global.provisioner(args.auto_approve).destroy()? {
        Outcome::Aborted => println!("Aborted."),
        Outcome::Completed => {
            println!();
            println!("✓ Infrastructure destroyed successfully");
        }
    }

    Ok(())
}
