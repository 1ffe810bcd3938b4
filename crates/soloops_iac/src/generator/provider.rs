//! `provider.tf`: Terraform settings and the cloud provider block.

use crate::error::IacResult;
use crate::provider::CloudProvider;

use super::TerraformGenerator;

impl TerraformGenerator<'_> {
    pub(super) fn render_provider(&self) -> IacResult<String> {
        let cloud = self.cloud()?;
        let project = &self.manifest.project;
        let env = &self.env.name;
        let region = &self.env.region;

        let provider_block = match cloud {
            CloudProvider::Aws => format!(
                r#"provider "aws" {{
  region = "{region}"

  default_tags {{
    tags = {{
      Project     = "{project}"
      Environment = "{env}"
      ManagedBy   = "SoloOps"
    }}
  }}
}}
"#
            ),
            CloudProvider::Gcp => format!(
                r#"provider "google" {{
  project = "{project}"
  region  = "{region}"

  default_labels = {{
    project     = "{project}"
    environment = "{env}"
    managed_by  = "soloops"
  }}
}}
"#
            ),
            // azurerm has no provider-level region; resources carry their own location.
            CloudProvider::Azure => format!(
                r#"provider "azurerm" {{
  features {{}}
}}

locals {{
  location = "{region}"

  default_tags = {{
    Project     = "{project}"
    Environment = "{env}"
    ManagedBy   = "SoloOps"
  }}
}}
"#
            ),
        };

        Ok(format!(
            r#"terraform {{
  required_version = ">= 1.5"

  required_providers {{
    {name} = {{
      source  = "{source}"
      version = "{version}"
    }}
  }}
}}

{provider_block}"#,
            name = cloud.provider_name(),
            source = cloud.provider_source(),
            version = cloud.provider_version(),
        ))
    }
}
