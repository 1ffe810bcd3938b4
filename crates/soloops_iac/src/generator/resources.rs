//! `main.tf`: resources for each blueprint.
//!
//! A blueprint with `runtime` or `ingress` becomes a serverless API
//! (Lambda + HTTP API + WAF). A blueprint with `domain` becomes a static site
//! (S3 + CloudFront + ACM). A blueprint can be both, or neither.

use soloops_manifest::Blueprint;

use super::TerraformGenerator;

const DEFAULT_LAMBDA_RUNTIME: &str = "nodejs18.x";

/// CloudFront only accepts certificates and web ACLs created in us-east-1.
const US_EAST_1_PROVIDER: &str = r#"
provider "aws" {
  alias  = "us_east_1"
  region = "us-east-1"

  default_tags {
    tags = {
      Project     = var.project_name
      Environment = var.environment
      ManagedBy   = "SoloOps"
    }
  }
}
"#;

fn is_edge(blueprint: &Blueprint) -> bool {
    blueprint.ingress() == Some("edge")
}

fn needs_us_east_1(blueprint: &Blueprint) -> bool {
    blueprint.is_static_site() || (blueprint.is_serverless_api() && is_edge(blueprint))
}

/// Blueprint key as it may appear inside an S3 bucket name.
fn bucket_suffix(name: &str) -> String {
    name.to_ascii_lowercase().replace('_', "-")
}

impl TerraformGenerator<'_> {
    pub(super) fn render_resources(&self) -> String {
        let mut out = String::from(
            r#"# Infrastructure resources generated by SoloOps

locals {
  name_prefix = "${var.project_name}-${var.environment}"

  # S3 bucket names allow only lowercase letters, digits, dots and hyphens.
  bucket_prefix = lower(replace(local.name_prefix, "_", "-"))
}
"#,
        );

        if self.env.blueprints.values().any(needs_us_east_1) {
            out.push_str(US_EAST_1_PROVIDER);
        }

        for (name, blueprint) in &self.env.blueprints {
            if blueprint.is_serverless_api() {
                out.push_str(&serverless_api_block(name, blueprint));
            }
            if let Some(domain) = blueprint.domain() {
                out.push_str(&static_site_block(name, domain));
            }
        }

        out
    }
}

/// Map a manifest runtime shorthand onto a Lambda runtime identifier.
///
/// `node18` becomes `nodejs18.x`; anything else is assumed to already be a
/// Lambda identifier (`python3.12`, `provided.al2023`, ...).
fn lambda_runtime(runtime: Option<&str>) -> String {
    match runtime {
        None => DEFAULT_LAMBDA_RUNTIME.to_string(),
        Some(rt) => match rt.strip_prefix("node") {
            Some(version) if !version.is_empty() && version.chars().all(|c| c.is_ascii_digit()) => {
                format!("nodejs{}.x", version)
            }
            _ => rt.to_string(),
        },
    }
}

fn lambda_handler(runtime: &str) -> &'static str {
    if runtime.starts_with("python") {
        "handler.handler"
    } else if runtime.starts_with("provided") {
        "bootstrap"
    } else {
        "index.handler"
    }
}

fn serverless_api_block(name: &str, blueprint: &Blueprint) -> String {
    let runtime = lambda_runtime(blueprint.runtime());
    let handler = lambda_handler(&runtime);
    // Edge ingress fronts the API with CloudFront, whose web ACLs must be global.
    let (waf_scope, waf_provider) = if is_edge(blueprint) {
        ("CLOUDFRONT", "\n  provider = aws.us_east_1\n")
    } else {
        ("REGIONAL", "")
    };

    format!(
        r#"
# ---------------------------------------------------------------------------
# {name}: serverless API
# ---------------------------------------------------------------------------

resource "aws_iam_role" "{name}_lambda" {{
  name = "${{local.name_prefix}}-{name}-lambda"

  assume_role_policy = jsonencode({{
    Version = "2012-10-17"
    Statement = [{{
      Action    = "sts:AssumeRole"
      Effect    = "Allow"
      Principal = {{ Service = "lambda.amazonaws.com" }}
    }}]
  }})
}}

resource "aws_iam_role_policy_attachment" "{name}_lambda_logs" {{
  role       = aws_iam_role.{name}_lambda.name
  policy_arn = "arn:aws:iam::aws:policy/service-role/AWSLambdaBasicExecutionRole"
}}

data "archive_file" "{name}" {{
  type        = "zip"
  source_dir  = "${{path.module}}/../functions/{name}"
  output_path = "${{path.module}}/.build/{name}.zip"
}}

resource "aws_lambda_function" "{name}" {{
  function_name    = "${{local.name_prefix}}-{name}"
  role             = aws_iam_role.{name}_lambda.arn
  runtime          = "{runtime}"
  handler          = "{handler}"
  filename         = data.archive_file.{name}.output_path
  source_code_hash = data.archive_file.{name}.output_base64sha256
  timeout          = 10
  memory_size      = 256

  environment {{
    variables = {{
      ENVIRONMENT = var.environment
    }}
  }}
}}

resource "aws_apigatewayv2_api" "{name}" {{
  name          = "${{local.name_prefix}}-{name}"
  protocol_type = "HTTP"
}}

resource "aws_apigatewayv2_integration" "{name}" {{
  api_id                 = aws_apigatewayv2_api.{name}.id
  integration_type       = "AWS_PROXY"
  integration_uri        = aws_lambda_function.{name}.invoke_arn
  payload_format_version = "2.0"
}}

resource "aws_apigatewayv2_route" "{name}" {{
  api_id    = aws_apigatewayv2_api.{name}.id
  route_key = "$default"
  target    = "integrations/${{aws_apigatewayv2_integration.{name}.id}}"
}}

resource "aws_apigatewayv2_stage" "{name}" {{
  api_id      = aws_apigatewayv2_api.{name}.id
  name        = "$default"
  auto_deploy = true
}}

resource "aws_lambda_permission" "{name}_apigw" {{
  statement_id  = "AllowAPIGatewayInvoke"
  action        = "lambda:InvokeFunction"
  function_name = aws_lambda_function.{name}.function_name
  principal     = "apigateway.amazonaws.com"
  source_arn    = "${{aws_apigatewayv2_api.{name}.execution_arn}}/*/*"
}}

resource "aws_wafv2_web_acl" "{name}" {{{waf_provider}
  name  = "${{local.name_prefix}}-{name}-waf"
  scope = "{waf_scope}"

  default_action {{
    allow {{}}
  }}

  rule {{
    name     = "rate-limit"
    priority = 1

    action {{
      block {{}}
    }}

    statement {{
      rate_based_statement {{
        limit              = 2000
        aggregate_key_type = "IP"
      }}
    }}

    visibility_config {{
      cloudwatch_metrics_enabled = true
      metric_name                = "{name}-rate-limit"
      sampled_requests_enabled   = true
    }}
  }}

  visibility_config {{
    cloudwatch_metrics_enabled = true
    metric_name                = "{name}-waf"
    sampled_requests_enabled   = true
  }}
}}
"#
    )
}

fn static_site_block(name: &str, domain: &str) -> String {
    let bucket = bucket_suffix(name);
    format!(
        r#"
# ---------------------------------------------------------------------------
# {name}: static site ({domain})
# ---------------------------------------------------------------------------

resource "aws_s3_bucket" "{name}" {{
  bucket = "${{local.bucket_prefix}}-{bucket}"
}}

resource "aws_s3_bucket_public_access_block" "{name}" {{
  bucket                  = aws_s3_bucket.{name}.id
  block_public_acls       = true
  block_public_policy     = true
  ignore_public_acls      = true
  restrict_public_buckets = true
}}

resource "aws_cloudfront_origin_access_control" "{name}" {{
  name                              = "${{local.name_prefix}}-{name}"
  origin_access_control_origin_type = "s3"
  signing_behavior                  = "always"
  signing_protocol                  = "sigv4"
}}

resource "aws_acm_certificate" "{name}" {{
  provider = aws.us_east_1

  domain_name       = "{domain}"
  validation_method = "DNS"

  lifecycle {{
    create_before_destroy = true
  }}
}}

resource "aws_cloudfront_distribution" "{name}" {{
  enabled             = true
  default_root_object = "index.html"
  aliases             = ["{domain}"]

  origin {{
    domain_name              = aws_s3_bucket.{name}.bucket_regional_domain_name
    origin_id                = "s3-{name}"
    origin_access_control_id = aws_cloudfront_origin_access_control.{name}.id
  }}

  default_cache_behavior {{
    target_origin_id       = "s3-{name}"
    viewer_protocol_policy = "redirect-to-https"
    allowed_methods        = ["GET", "HEAD"]
    cached_methods         = ["GET", "HEAD"]

    forwarded_values {{
      query_string = false
      cookies {{
        forward = "none"
      }}
    }}
  }}

  restrictions {{
    geo_restriction {{
      restriction_type = "none"
    }}
  }}

  viewer_certificate {{
    acm_certificate_arn      = aws_acm_certificate.{name}.arn
    ssl_support_method       = "sni-only"
    minimum_protocol_version = "TLSv1.2_2021"
  }}
}}

resource "aws_s3_bucket_policy" "{name}" {{
  bucket = aws_s3_bucket.{name}.id

  policy = jsonencode({{
    Version = "2012-10-17"
    Statement = [{{
      Effect    = "Allow"
      Principal = {{ Service = "cloudfront.amazonaws.com" }}
      Action    = "s3:GetObject"
      Resource  = "${{aws_s3_bucket.{name}.arn}}/*"
      Condition = {{
        StringEquals = {{
          "AWS:SourceArn" = aws_cloudfront_distribution.{name}.arn
        }}
      }}
    }}]
  }})
}}
"#
    )
}
