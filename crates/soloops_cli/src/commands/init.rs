//! Init command - Create a starter manifest.

use anyhow::{Context, Result};
use tracing::info;

use soloops_manifest::ManifestLoader;

use super::GlobalOptions;

pub fn execute(global: &GlobalOptions) -> Result<()> {
    let path = &global.manifest;
    info!("Initializing SoloOps manifest at {:?}", path);

    ManifestLoader::init(path).with_context(|| {
        format!(
            "could not create {} (use --file to specify a different path)",
            path.display()
        )
    })?;

    println!("✓ Created {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to customize your infrastructure", path.display());
    println!("  2. Run 'soloops validate' to check your configuration");
    println!("  3. Run 'soloops generate' to create Terraform files");
    println!("  4. Run 'soloops preview' to see planned changes");
    println!("  5. Run 'soloops apply' to provision infrastructure");

    Ok(())
}
