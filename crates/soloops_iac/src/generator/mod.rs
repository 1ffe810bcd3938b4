//! Terraform generation from a manifest environment.
//!
//! Each artifact is rendered by a fixed template. Templates branch on the
//! cloud target (provider, budget) and on blueprint shape (resources,
//! outputs); nothing else influences the text, so regenerating from an
//! unchanged manifest produces identical files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use soloops_manifest::{Environment, Manifest};

use crate::error::{IacError, IacResult};
use crate::provider::{Artifact, CloudProvider};

mod budget;
mod outputs;
mod provider;
mod resources;
mod variables;

/// Directory artifacts are written to when none is configured.
pub const DEFAULT_INFRA_DIR: &str = "infra";

/// Renders the Terraform artifacts for one environment of a manifest.
pub struct TerraformGenerator<'a> {
    manifest: &'a Manifest,
    env: &'a Environment,
}

impl<'a> TerraformGenerator<'a> {
    pub fn new(manifest: &'a Manifest, env: &'a Environment) -> Self {
        Self { manifest, env }
    }

    /// The manifest's cloud target.
    pub fn cloud(&self) -> IacResult<CloudProvider> {
        CloudProvider::parse(&self.manifest.cloud)
    }

    /// Render one artifact to text.
    pub fn render(&self, artifact: Artifact) -> IacResult<String> {
        match artifact {
            Artifact::Provider => self.render_provider(),
            Artifact::Variables => Ok(self.render_variables()),
            Artifact::Main => Ok(self.render_resources()),
            Artifact::Budget => self.render_budget(),
            Artifact::Outputs => Ok(self.render_outputs()),
        }
    }

    /// Write all artifacts into `out_dir`, creating it if needed.
    ///
    /// Existing files are overwritten. Stops at the first failure; artifacts
    /// written before it are left in place.
    pub fn generate(&self, out_dir: &Path) -> IacResult<Vec<PathBuf>> {
        info!(
            "Generating Terraform for {} ({}) at {:?}",
            self.env.name, self.manifest.cloud, out_dir
        );

        fs::create_dir_all(out_dir).map_err(|source| IacError::Write {
            path: out_dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::with_capacity(Artifact::ALL.len());
        for artifact in Artifact::ALL {
            let content = self.render(artifact)?;
            let path = out_dir.join(artifact.file_name());
            debug!("Writing {:?} ({} bytes)", path, content.len());

            fs::write(&path, content).map_err(|source| IacError::Write {
                path: path.clone(),
                source,
            })?;
            written.push(path);
        }

        Ok(written)
    }
}

/// Format a dollar amount the way Terraform files carry it.
pub(crate) fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}
