//! Preview command - Show the Terraform plan.

use anyhow::Result;

use super::GlobalOptions;

pub fn execute(global: &GlobalOptions) -> Result<()> {
    // Preview never changes anything, so it needs no confirmation.
    global.provisioner(true).preview()?;

    println!();
    println!("✓ Plan complete");
    println!("Run 'soloops apply' to provision these changes");

    Ok(())
}
