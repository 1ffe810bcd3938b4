//! Starter manifest written by `soloops init`.

const DEFAULT_MANIFEST: &str = r#"project: my-project
cloud: aws
environments:
  - name: prod
    region: us-east-1
    budget_usd: 150
    blueprints:
      web_api:
        runtime: node18
        ingress: edge
      static_site:
        domain: example.com
policies:
  require_https: true
  deny_public_s3: true
"#;

/// The default `soloops.yaml` contents.
pub fn default_manifest() -> &'static str {
    DEFAULT_MANIFEST
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ManifestLoader, ManifestValidator};

    #[test]
    fn test_default_manifest_is_valid() {
        let manifest = ManifestLoader::parse(default_manifest()).unwrap();
        ManifestValidator::validate(&manifest).unwrap();

        let env = manifest.select_environment(None).unwrap();
        assert_eq!(env.name, "prod");
        assert_eq!(env.blueprints.len(), 2);
        assert!(manifest.policies_or_default().require_https);
    }
}
