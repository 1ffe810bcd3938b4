//! # soloops_manifest
//!
//! The `soloops.yaml` manifest: data model, loading, and validation.
//!
//! A manifest names a project, a cloud target, and one or more environments.
//! Each environment carries a region, a monthly budget, and a set of
//! blueprints that the generator in `soloops_iac` turns into Terraform.
//!
//! ## Example
//!
//! ```rust,no_run
//! use soloops_manifest::{ManifestLoader, ManifestValidator};
//!
//! let manifest = ManifestLoader::load("soloops.yaml").unwrap();
//! ManifestValidator::validate(&manifest).unwrap();
//!
//! let env = manifest.select_environment(None).unwrap();
//! println!("{} has {} blueprints", env.name, env.blueprints.len());
//! ```

pub mod error;
pub mod loader;
pub mod models;
pub mod template;
pub mod validator;

pub use error::{ManifestError, ManifestResult};
pub use loader::{ManifestLoader, DEFAULT_MANIFEST_FILE};
pub use models::*;
pub use template::default_manifest;
pub use validator::{ManifestValidator, SUPPORTED_CLOUDS};
