//! Cloud provider and artifact definitions.

use crate::error::{IacError, IacResult};

/// Supported cloud providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloudProvider {
    Aws,
    Azure,
    Gcp,
}

impl CloudProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "aws",
            CloudProvider::Azure => "azure",
            CloudProvider::Gcp => "gcp",
        }
    }

    /// Parse a manifest `cloud` value. Matching is exact.
    pub fn parse(s: &str) -> IacResult<Self> {
        match s {
            "aws" => Ok(CloudProvider::Aws),
            "azure" => Ok(CloudProvider::Azure),
            "gcp" => Ok(CloudProvider::Gcp),
            other => Err(IacError::UnsupportedCloud(other.to_string())),
        }
    }

    pub fn all() -> Vec<Self> {
        vec![CloudProvider::Aws, CloudProvider::Azure, CloudProvider::Gcp]
    }

    /// Get the Terraform provider name.
    pub fn provider_name(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "aws",
            CloudProvider::Azure => "azurerm",
            CloudProvider::Gcp => "google",
        }
    }

    /// Registry source of the Terraform provider.
    pub fn provider_source(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "hashicorp/aws",
            CloudProvider::Azure => "hashicorp/azurerm",
            CloudProvider::Gcp => "hashicorp/google",
        }
    }

    /// Version constraint pinned in `required_providers`.
    pub fn provider_version(&self) -> &'static str {
        match self {
            CloudProvider::Aws | CloudProvider::Gcp => "~> 5.0",
            CloudProvider::Azure => "~> 3.0",
        }
    }
}

impl std::fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// File extension of generated artifacts.
pub const ARTIFACT_EXTENSION: &str = "tf";

/// The fixed set of generated Terraform files, in write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Provider,
    Variables,
    Main,
    Budget,
    Outputs,
}

impl Artifact {
    pub const ALL: [Artifact; 5] = [
        Artifact::Provider,
        Artifact::Variables,
        Artifact::Main,
        Artifact::Budget,
        Artifact::Outputs,
    ];

    pub fn stem(&self) -> &'static str {
        match self {
            Artifact::Provider => "provider",
            Artifact::Variables => "variables",
            Artifact::Main => "main",
            Artifact::Budget => "budget",
            Artifact::Outputs => "outputs",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.stem(), ARTIFACT_EXTENSION)
    }
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.file_name())
    }
}
