//! Manifest validation.

use std::collections::HashSet;

use crate::error::{ManifestError, ManifestResult};
use crate::models::{BlueprintKind, Manifest};

/// Cloud targets the generator knows how to emit.
pub const SUPPORTED_CLOUDS: [&str; 3] = ["aws", "gcp", "azure"];

/// Validator for manifests.
pub struct ManifestValidator;

impl ManifestValidator {
    /// Check required fields and constraints.
    ///
    /// Stops at the first violation. Environment-level messages are prefixed
    /// with the environment's index and, once known, its name.
    pub fn validate(manifest: &Manifest) -> ManifestResult<()> {
        if manifest.project.is_empty() {
            return Err(invalid("project name is required"));
        }

        if manifest.cloud.is_empty() {
            return Err(invalid("cloud provider is required"));
        }

        if !SUPPORTED_CLOUDS.contains(&manifest.cloud.as_str()) {
            return Err(invalid(format!(
                "unsupported cloud provider: {} (supported: {})",
                manifest.cloud,
                SUPPORTED_CLOUDS.join(", ")
            )));
        }

        if manifest.environments.is_empty() {
            return Err(invalid("at least one environment is required"));
        }

        let mut seen = HashSet::new();
        for (i, env) in manifest.environments.iter().enumerate() {
            if env.name.is_empty() {
                return Err(invalid(format!("environment[{}]: name is required", i)));
            }
            if env.region.is_empty() {
                return Err(invalid(format!(
                    "environment[{}] ({}): region is required",
                    i, env.name
                )));
            }
            if !env.budget_usd.is_finite() || env.budget_usd <= 0.0 {
                return Err(invalid(format!(
                    "environment[{}] ({}): budget_usd must be greater than 0",
                    i, env.name
                )));
            }
            if env.blueprints.is_empty() {
                return Err(invalid(format!(
                    "environment[{}] ({}): at least one blueprint is required",
                    i, env.name
                )));
            }
            if !seen.insert(env.name.as_str()) {
                return Err(invalid(format!(
                    "environment[{}] ({}): duplicate environment name",
                    i, env.name
                )));
            }
        }

        Ok(())
    }

    /// Non-fatal findings worth showing to the user.
    ///
    /// Currently flags blueprints whose declared `type` promises resources
    /// that their fields will not produce.
    pub fn warnings(manifest: &Manifest) -> Vec<String> {
        let mut warnings = Vec::new();

        for env in &manifest.environments {
            for (name, bp) in &env.blueprints {
                let Some(kind) = bp.kind() else { continue };
                let missing = match kind {
                    BlueprintKind::WebApi if !bp.is_serverless_api() => "runtime or ingress",
                    BlueprintKind::StaticSite if !bp.is_static_site() => "domain",
                    _ => continue,
                };
                warnings.push(format!(
                    "{}/{}: declared type '{}' but no {} set; no resources will be generated",
                    env.name,
                    name,
                    kind.as_str(),
                    missing
                ));
            }
        }

        warnings
    }
}

fn invalid(message: impl Into<String>) -> ManifestError {
    ManifestError::Validation(message.into())
}
