//! `variables.tf`: manifest values exposed as Terraform inputs.

use super::{format_amount, TerraformGenerator};

impl TerraformGenerator<'_> {
    pub(super) fn render_variables(&self) -> String {
        format!(
            r#"variable "project_name" {{
  description = "Project name"
  type        = string
  default     = "{project}"
}}

variable "environment" {{
  description = "Environment name"
  type        = string
  default     = "{env}"
}}

variable "region" {{
  description = "Cloud region"
  type        = string
  default     = "{region}"
}}

variable "budget_usd" {{
  description = "Monthly budget in USD"
  type        = number
  default     = {budget}
}}
"#,
            project = self.manifest.project,
            env = self.env.name,
            region = self.env.region,
            budget = format_amount(self.env.budget_usd),
        )
    }
}
