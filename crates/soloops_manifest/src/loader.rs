//! Manifest reading and scaffolding.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ManifestError, ManifestResult};
use crate::models::Manifest;
use crate::template::default_manifest;

/// File name looked up when no manifest path is given.
pub const DEFAULT_MANIFEST_FILE: &str = "soloops.yaml";

/// Reader and initializer for manifest files.
pub struct ManifestLoader;

impl ManifestLoader {
    /// Read and parse a manifest file.
    ///
    /// Parsing only checks shape; call [`crate::ManifestValidator::validate`]
    /// before using the result.
    pub fn load(path: impl AsRef<Path>) -> ManifestResult<Manifest> {
        let path = path.as_ref();
        debug!("Reading manifest from {:?}", path);

        let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse manifest text.
    pub fn parse(content: &str) -> ManifestResult<Manifest> {
        let manifest: Manifest = serde_yaml::from_str(content)?;
        Ok(manifest)
    }

    /// Write the starter manifest to `path`. Refuses to overwrite.
    pub fn init(path: impl AsRef<Path>) -> ManifestResult<()> {
        let path = path.as_ref();
        if path.exists() {
            return Err(ManifestError::AlreadyExists(path.to_path_buf()));
        }

        fs::write(path, default_manifest())?;
        info!("Created manifest at {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_preserves_unknown_blueprint_fields() {
        let manifest = ManifestLoader::parse(
            r#"
project: demo
cloud: aws
environments:
  - name: prod
    region: us-east-1
    budget_usd: 10
    blueprints:
      api:
        runtime: python3.11
        memory_mb: 256
        tags:
          team: core
"#,
        )
        .unwrap();

        let bp = &manifest.environments[0].blueprints["api"];
        assert_eq!(bp.runtime(), Some("python3.11"));
        assert_eq!(bp.extra["memory_mb"].as_u64(), Some(256));
        assert!(bp.extra.contains_key("tags"));
        assert!(!bp.extra.contains_key("runtime"));
    }

    #[test]
    fn test_parse_null_blueprint_is_empty() {
        let manifest = ManifestLoader::parse(
            "project: p\ncloud: aws\nenvironments:\n  - name: a\n    blueprints:\n      db:\n",
        )
        .unwrap();

        let bp = &manifest.environments[0].blueprints["db"];
        assert!(!bp.is_serverless_api());
        assert!(!bp.is_static_site());
    }

    #[test]
    fn test_parse_malformed_yaml() {
        let result = ManifestLoader::parse("project: [unterminated");
        assert!(matches!(result, Err(ManifestError::Yaml(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = ManifestLoader::load(dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(ManifestError::Read { .. })));
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_MANIFEST_FILE);

        ManifestLoader::init(&path).unwrap();
        let first = fs::read_to_string(&path).unwrap();

        let result = ManifestLoader::init(&path);
        assert!(matches!(result, Err(ManifestError::AlreadyExists(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }
}
