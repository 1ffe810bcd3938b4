//! # soloops_iac
//!
//! Terraform generation and provisioning for SoloOps.
//!
//! This crate turns a validated manifest environment into Terraform files and
//! drives a local Terraform binary against them.
//!
//! ## Features
//!
//! - Provider, variables, resources, budget and outputs artifacts for AWS,
//!   GCP and Azure targets
//! - Serverless API and static site resource blocks chosen by blueprint shape
//! - Preview/apply/destroy workflows behind pluggable confirmation policies
//! - A recording mock runner for tests
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use soloops_iac::{Outcome, Prompt, Provisioner, TerraformCli, TerraformGenerator};
//! use soloops_manifest::ManifestLoader;
//!
//! let manifest = ManifestLoader::load("soloops.yaml").unwrap();
//! let env = manifest.select_environment(None).unwrap();
//!
//! TerraformGenerator::new(&manifest, env)
//!     .generate(Path::new("infra"))
//!     .unwrap();
//!
//! let provisioner = Provisioner::new(
//!     Arc::new(TerraformCli::new()),
//!     Arc::new(Prompt::stdio()),
//!     "infra",
//! );
//! if provisioner.apply().unwrap() == Outcome::Aborted {
//!     println!("Aborted.");
//! }
//! ```

pub mod confirm;
pub mod error;
pub mod generator;
pub mod mock;
pub mod provider;
pub mod terraform;

pub use confirm::{AutoApprove, ConfirmRequest, Confirmation, Prompt};
pub use error::{IacError, IacResult};
pub use generator::{TerraformGenerator, DEFAULT_INFRA_DIR};
pub use mock::{CapturedCall, MockToolRunner};
pub use provider::{Artifact, CloudProvider, ARTIFACT_EXTENSION};
pub use terraform::{Outcome, Provisioner, TerraformCli, ToolRunner, DEFAULT_TERRAFORM_BIN};
