//! Validate command - Check the manifest.

use anyhow::Result;
use clap::Args;
use tracing::{info, warn};

use soloops_manifest::ManifestValidator;

use super::GlobalOptions;

#[derive(Args)]
pub struct ValidateArgs {
    /// Print the manifest summary as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ValidateArgs, global: &GlobalOptions) -> Result<()> {
    info!("Validating manifest: {:?}", global.manifest);

    let manifest = global.load_manifest()?;

    for warning in ManifestValidator::warnings(&manifest) {
        warn!("{}", warning);
    }

    let summary = manifest.summary();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("✓ Configuration is valid ({})", global.manifest.display());
    println!("  Project: {}", summary.project);
    println!("  Cloud: {}", summary.cloud);
    println!("  Environments: {}", summary.environments.len());
    for env in &summary.environments {
        println!(
            "    - {} ({}): ${:.2} budget, {} blueprints",
            env.name, env.region, env.budget_usd, env.blueprints
        );
    }
    println!(
        "  Policies: require_https={}, deny_public_s3={}",
        summary.policies.require_https, summary.policies.deny_public_s3
    );

    Ok(())
}
