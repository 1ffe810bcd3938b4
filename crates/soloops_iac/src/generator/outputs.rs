//! `outputs.tf`: per-blueprint endpoints plus environment metadata.

use super::TerraformGenerator;

impl TerraformGenerator<'_> {
    pub(super) fn render_outputs(&self) -> String {
        let mut out = String::from("# Terraform outputs\n\n");

        for (name, blueprint) in &self.env.blueprints {
            if blueprint.is_serverless_api() {
                guarded_output(
                    &mut out,
                    &format!("{name}_api_url"),
                    &format!("API Gateway endpoint URL for {name}"),
                    &format!("aws_apigatewayv2_stage.{name}.invoke_url"),
                );
                guarded_output(
                    &mut out,
                    &format!("{name}_lambda_arn"),
                    &format!("Lambda function ARN for {name}"),
                    &format!("aws_lambda_function.{name}.arn"),
                );
            }

            if blueprint.is_static_site() {
                guarded_output(
                    &mut out,
                    &format!("{name}_bucket_name"),
                    &format!("S3 bucket name for {name}"),
                    &format!("aws_s3_bucket.{name}.id"),
                );
                guarded_output(
                    &mut out,
                    &format!("{name}_cloudfront_url"),
                    &format!("CloudFront distribution URL for {name}"),
                    &format!("aws_cloudfront_distribution.{name}.domain_name"),
                );
            }
        }

        out.push_str(
            r#"output "environment" {
  description = "Environment name"
  value       = var.environment
}

output "region" {
  description = "Deployment region"
  value       = var.region
}
"#,
        );

        out
    }
}

/// Append an output that evaluates to `"N/A"` when `reference` is absent.
fn guarded_output(out: &mut String, name: &str, description: &str, reference: &str) {
    out.push_str(&format!(
        r#"output "{name}" {{
  description = "{description}"
  value       = try({reference}, "N/A")
}}

"#
    ));
}
