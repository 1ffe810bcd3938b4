//! Apply command - Provision infrastructure.

use anyhow::Result;
use clap::Args;

use soloops_iac::Outcome;

use super::GlobalOptions;

#[derive(Args)]
pub struct ApplyArgs {
    /// Skip interactive approval prompt
    #[arg(long)]
    pub auto_approve: bool,
}

pub fn execute(args: ApplyArgs, global: &GlobalOptions) -> Result<()> {
    match global.provisioner(args.auto_approve).apply()? {
        Outcome::Aborted => println!("Aborted."),
        Outcome::Completed => {
            println!();
            println!("✓ Infrastructure provisioned successfully");
            println!();
            println!(
                "To view outputs, run: cd {} && terraform output",
                global.infra_dir.display()
            );
            println!("To destroy resources, run: soloops destroy");
        }
    }

    Ok(())
}
