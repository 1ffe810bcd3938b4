//! `budget.tf`: monthly cost alert.

use crate::error::IacResult;
use crate::provider::CloudProvider;

use super::{format_amount, TerraformGenerator};

/// Percentages of the budget at which a notification fires.
const ALERT_THRESHOLDS: [u32; 2] = [80, 100];

impl TerraformGenerator<'_> {
    pub(super) fn render_budget(&self) -> IacResult<String> {
        if self.cloud()? != CloudProvider::Aws {
            return Ok("# Budget alerts currently only supported for AWS\n".to_string());
        }

        let notifications: String = ALERT_THRESHOLDS
            .iter()
            .map(|threshold| {
                format!(
                    r#"
  notification {{
    comparison_operator        = "GREATER_THAN"
    threshold                  = {threshold}
    threshold_type             = "PERCENTAGE"
    notification_type          = "ACTUAL"
    subscriber_email_addresses = []
  }}
"#
                )
            })
            .collect();

        Ok(format!(
            r#"# Budget alert
resource "aws_budgets_budget" "monthly" {{
  name         = "${{var.project_name}}-${{var.environment}}-monthly"
  budget_type  = "COST"
  limit_amount = "{amount}"
  limit_unit   = "USD"
  time_unit    = "MONTHLY"
{notifications}
  cost_filter {{
    name = "TagKeyValue"
    values = [
      "user:Project${project}",
    ]
  }}
}}
"#,
            amount = format_amount(self.env.budget_usd),
            project = self.manifest.project,
        ))
    }
}

#[cfg(test)]
mod tests {
    use soloops_manifest::ManifestLoader;

    use crate::generator::TerraformGenerator;
    use crate::provider::Artifact;

    fn render_for(cloud: &str, budget: &str) -> String {
        let manifest = ManifestLoader::parse(&format!(
            "project: demo\ncloud: {cloud}\nenvironments:\n  - name: prod\n    region: r\n    budget_usd: {budget}\n    blueprints:\n      x: {{}}\n"
        ))
        .unwrap();
        let env = manifest.select_environment(None).unwrap();
        TerraformGenerator::new(&manifest, env)
            .render(Artifact::Budget)
            .unwrap()
    }

    #[test]
    fn test_aws_budget_has_two_actual_thresholds() {
        let text = render_for("aws", "150");
        assert!(text.contains(r#"limit_amount = "150.00""#));
        assert!(text.contains("= 80\n"));
        assert!(text.contains("= 100\n"));
        assert!(text.contains(r#""user:Project$demo""#));
        assert_eq!(text.matches(r#"notification_type          = "ACTUAL""#).count(), 2);
        assert_eq!(text.matches(r#""GREATER_THAN""#).count(), 2);
        assert!(text.contains("${var.project_name}-${var.environment}-monthly"));
    }

    #[test]
    fn test_fractional_budget_rounds_to_cents() {
        let text = render_for("aws", "99.999");
        assert!(text.contains(r#"limit_amount = "100.00""#));
    }

    #[test]
    fn test_other_clouds_get_placeholder() {
        for cloud in ["gcp", "azure"] {
            let text = render_for(cloud, "10");
            assert!(text.starts_with('#'));
            assert!(!text.contains("resource"));
        }
    }
}
