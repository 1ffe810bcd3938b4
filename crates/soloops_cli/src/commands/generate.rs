//! Generate command - Write Terraform files for one environment.

use anyhow::{Context, Result};
use tracing::info;

use soloops_iac::TerraformGenerator;

use super::GlobalOptions;

pub fn execute(global: &GlobalOptions) -> Result<()> {
    let manifest = global.load_manifest()?;

    let requested = global.environment.as_deref().filter(|e| !e.is_empty());
    let env = manifest.select_environment(requested)?;
    if requested.is_none() {
        println!("Using default environment: {}", env.name);
    }

    info!("Generating Terraform for environment {}", env.name);
    TerraformGenerator::new(&manifest, env)
        .generate(&global.infra_dir)
        .context("generation failed")?;

    println!("✓ Generated Terraform files in {}/", global.infra_dir.display());
    println!("  Environment: {} ({})", env.name, env.region);
    println!("  Budget: ${:.2}/month", env.budget_usd);
    println!("  Blueprints: {}", env.blueprints.len());
    println!();
    println!("Next steps:");
    println!("  1. Review generated files in {}/", global.infra_dir.display());
    println!("  2. Run 'soloops preview' to see planned changes");
    println!("  3. Run 'soloops apply' to provision infrastructure");

    Ok(())
}
