//! End-to-end tests for the `soloops` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const DEMO_MANIFEST: &str = r#"project: demo
cloud: aws
environments:
  - name: prod
    region: us-east-1
    budget_usd: 100
    blueprints:
      api:
        runtime: node18
        ingress: edge
  - name: dev
    region: eu-west-1
    budget_usd: 25.5
    blueprints:
      site:
        domain: dev.example.com
"#;

fn soloops(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("soloops").unwrap();
    cmd.current_dir(dir)
        .env_remove("SOLOOPS_FILE")
        .env_remove("SOLOOPS_ENV")
        .env_remove("SOLOOPS_INFRA_DIR")
        .env_remove("SOLOOPS_TERRAFORM_BIN")
        .env_remove("RUST_LOG");
    cmd
}

fn write_demo(dir: &Path) {
    fs::write(dir.join("soloops.yaml"), DEMO_MANIFEST).unwrap();
}

#[test]
fn test_init_creates_manifest_once() {
    let dir = tempdir().unwrap();

    soloops(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created soloops.yaml"));

    let content = fs::read_to_string(dir.path().join("soloops.yaml")).unwrap();
    assert!(content.contains("project: my-project"));

    soloops(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_then_validate() {
    let dir = tempdir().unwrap();
    soloops(dir.path()).args(["init", "-f", "custom.yaml"]).assert().success();

    soloops(dir.path())
        .args(["validate", "--file", "custom.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project: my-project"))
        .stdout(predicate::str::contains("prod (us-east-1): $150.00 budget, 2 blueprints"));
}

#[test]
fn test_validate_json_summary() {
    let dir = tempdir().unwrap();
    write_demo(dir.path());

    let output = soloops(dir.path())
        .args(["validate", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["project"], "demo");
    assert_eq!(summary["environments"][1]["name"], "dev");
    assert_eq!(summary["environments"][1]["budget_usd"], 25.5);
}

#[test]
fn test_validate_failure_exit_code() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("soloops.yaml"),
        DEMO_MANIFEST.replace("cloud: aws", "cloud: oracle"),
    )
    .unwrap();

    soloops(dir.path())
        .arg("validate")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unsupported cloud provider: oracle"));
}

#[test]
fn test_validate_missing_manifest() {
    let dir = tempdir().unwrap();

    soloops(dir.path())
        .arg("validate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn test_generate_default_environment() {
    let dir = tempdir().unwrap();
    write_demo(dir.path());

    soloops(dir.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using default environment: prod"))
        .stdout(predicate::str::contains("Budget: $100.00/month"));

    let infra = dir.path().join("infra");
    for file in ["provider.tf", "variables.tf", "main.tf", "budget.tf", "outputs.tf"] {
        assert!(infra.join(file).exists(), "missing {}", file);
    }

    let outputs = fs::read_to_string(infra.join("outputs.tf")).unwrap();
    assert!(outputs.contains("api_api_url"));
    assert!(outputs.contains("api_lambda_arn"));
}

#[test]
fn test_generate_selected_environment_and_dir() {
    let dir = tempdir().unwrap();
    write_demo(dir.path());

    soloops(dir.path())
        .args(["generate", "-e", "dev", "--infra-dir", "out/tf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Environment: dev (eu-west-1)"));

    let provider = fs::read_to_string(dir.path().join("out/tf/provider.tf")).unwrap();
    assert!(provider.contains("eu-west-1"));
    let budget = fs::read_to_string(dir.path().join("out/tf/budget.tf")).unwrap();
    assert!(budget.contains("25.50"));
    assert!(!dir.path().join("infra").exists());
}

#[test]
fn test_generate_unknown_environment() {
    let dir = tempdir().unwrap();
    write_demo(dir.path());

    soloops(dir.path())
        .args(["generate", "--env", "staging"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("environment not found: staging"));

    assert!(!dir.path().join("infra").exists());
}

#[test]
fn test_generate_invalid_manifest_writes_nothing() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("soloops.yaml"),
        DEMO_MANIFEST.replace("budget_usd: 100", "budget_usd: 0"),
    )
    .unwrap();

    soloops(dir.path()).arg("generate").assert().code(3);
    assert!(!dir.path().join("infra").exists());
}

#[test]
fn test_apply_requires_generated_files() {
    let dir = tempdir().unwrap();

    soloops(dir.path())
        .args(["apply", "--auto-approve"])
        .assert()
        .code(5)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Run 'soloops generate' first"));

    soloops(dir.path())
        .arg("preview")
        .assert()
        .code(5)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_destroy_declined_does_not_run_terraform() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("infra")).unwrap();

    // A missing binary would fail the command if it were launched.
    soloops(dir.path())
        .args(["destroy", "--terraform-bin", "soloops-no-such-terraform"])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Type 'destroy' to confirm"))
        .stdout(predicate::str::contains("Aborted."));
}

#[test]
fn test_missing_terraform_binary() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("infra")).unwrap();

    soloops(dir.path())
        .args(["preview", "--terraform-bin", "soloops-no-such-terraform"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("failed to launch soloops-no-such-terraform"));
}

#[cfg(unix)]
#[test]
fn test_apply_declined_after_init() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("infra")).unwrap();

    soloops(dir.path())
        .args(["apply", "--terraform-bin", "true"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Do you want to continue? (yes/no)"))
        .stdout(predicate::str::contains("Aborted."));
}

#[cfg(unix)]
#[test]
fn test_destroy_auto_approve_skips_prompt() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("infra")).unwrap();

    soloops(dir.path())
        .args(["destroy", "--auto-approve", "--terraform-bin", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type 'destroy' to confirm").not())
        .stdout(predicate::str::contains("Infrastructure destroyed successfully"));
}

#[cfg(unix)]
#[test]
fn test_apply_propagates_tool_failure() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("infra")).unwrap();

    soloops(dir.path())
        .args(["apply", "--auto-approve", "--terraform-bin", "false"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("false init failed: exit status 1"));
}

#[test]
fn test_version_command() {
    let dir = tempdir().unwrap();

    soloops(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
