//! Data models for the `soloops.yaml` manifest.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ManifestError, ManifestResult};

/// Root manifest document.
///
/// Every field defaults when absent so that a structurally incomplete
/// manifest still parses and the validator can report what is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub project: String,
    /// Cloud target as written. Checked against [`crate::SUPPORTED_CLOUDS`]
    /// by the validator.
    #[serde(default)]
    pub cloud: String,
    #[serde(default)]
    pub environments: Vec<Environment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policies: Option<Policies>,
}

impl Manifest {
    /// Look up an environment by exact name.
    pub fn environment(&self, name: &str) -> ManifestResult<&Environment> {
        self.environments
            .iter()
            .find(|env| env.name == name)
            .ok_or_else(|| ManifestError::EnvironmentNotFound(name.to_string()))
    }

    /// Resolve the environment to target.
    ///
    /// `None` or an empty name selects the first declared environment.
    pub fn select_environment(&self, name: Option<&str>) -> ManifestResult<&Environment> {
        match name.filter(|n| !n.is_empty()) {
            Some(name) => self.environment(name),
            None => self.environments.first().ok_or(ManifestError::NoEnvironments),
        }
    }

    /// Policies, or the all-off defaults when the manifest has none.
    pub fn policies_or_default(&self) -> Policies {
        self.policies.clone().unwrap_or_default()
    }

    /// Build a summary suitable for printing.
    pub fn summary(&self) -> ManifestSummary {
        ManifestSummary {
            project: self.project.clone(),
            cloud: self.cloud.clone(),
            environments: self
                .environments
                .iter()
                .map(|env| EnvironmentSummary {
                    name: env.name.clone(),
                    region: env.region.clone(),
                    budget_usd: env.budget_usd,
                    blueprints: env.blueprints.len(),
                })
                .collect(),
            policies: self.policies_or_default(),
        }
    }
}

/// A named deployment target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub budget_usd: f64,
    /// Blueprints keyed by name. Ordered so that generated output is stable.
    #[serde(default, deserialize_with = "blueprints_or_null")]
    pub blueprints: BTreeMap<String, Blueprint>,
}

/// Accepts `blueprints: ~` and bare `name:` entries as empty values.
fn blueprints_or_null<'de, D>(deserializer: D) -> Result<BTreeMap<String, Blueprint>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<Blueprint>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, bp)| (name, bp.unwrap_or_default()))
        .collect())
}

/// A loosely-typed infrastructure pattern instance.
///
/// No field is required. Which Terraform resources get emitted is decided by
/// which fields are present, not by `type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub blueprint_type: Option<String>,

    // Web API fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingress: Option<String>,

    // Database fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_type: Option<String>,

    // Static site fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Any keys not listed above, preserved as written.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Blueprint {
    pub fn runtime(&self) -> Option<&str> {
        non_empty(&self.runtime)
    }

    pub fn ingress(&self) -> Option<&str> {
        non_empty(&self.ingress)
    }

    pub fn domain(&self) -> Option<&str> {
        non_empty(&self.domain)
    }

    /// Whether this blueprint describes a serverless API (function + gateway).
    pub fn is_serverless_api(&self) -> bool {
        self.runtime().is_some() || self.ingress().is_some()
    }

    /// Whether this blueprint describes a static site (bucket + CDN).
    pub fn is_static_site(&self) -> bool {
        self.domain().is_some()
    }

    /// The declared `type`, if any.
    pub fn kind(&self) -> Option<BlueprintKind> {
        non_empty(&self.blueprint_type).map(BlueprintKind::from_declared)
    }
}

/// Declared blueprint kind. Informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlueprintKind {
    WebApi,
    StaticSite,
    Database,
    Unknown(String),
}

impl BlueprintKind {
    pub fn from_declared(s: &str) -> Self {
        match s {
            "web_api" | "serverless_api" => BlueprintKind::WebApi,
            "static_site" => BlueprintKind::StaticSite,
            "database" => BlueprintKind::Database,
            other => BlueprintKind::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BlueprintKind::WebApi => "web_api",
            BlueprintKind::StaticSite => "static_site",
            BlueprintKind::Database => "database",
            BlueprintKind::Unknown(s) => s,
        }
    }
}

/// Security and compliance flags. Stored and reported, not enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policies {
    #[serde(default)]
    pub require_https: bool,
    #[serde(default)]
    pub deny_public_s3: bool,
}

/// Printable view of a manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestSummary {
    pub project: String,
    pub cloud: String,
    pub environments: Vec<EnvironmentSummary>,
    pub policies: Policies,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentSummary {
    pub name: String,
    pub region: String,
    pub budget_usd: f64,
    pub blueprints: usize,
}
