//! Mock tool runner for testing.
//!
//! Records every invocation and returns scripted exit codes, so provisioning
//! workflows can be exercised without a Terraform install.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{IacError, IacResult};
use crate::terraform::ToolRunner;

/// Captured invocation for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedCall {
    pub working_dir: PathBuf,
    pub args: Vec<String>,
}

impl CapturedCall {
    /// The Terraform subcommand (first argument).
    pub fn subcommand(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or_default()
    }
}

/// Mock runner. Clones share their call log.
#[derive(Clone, Default)]
pub struct MockToolRunner {
    captured_calls: Arc<RwLock<Vec<CapturedCall>>>,
    /// Exit codes keyed by subcommand.
    failures: Arc<RwLock<HashMap<String, i32>>>,
}

impl MockToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `subcommand` exit with `code`.
    pub fn fail_on(self, subcommand: impl Into<String>, code: i32) -> Self {
        self.failures.write().insert(subcommand.into(), code);
        self
    }

    pub fn get_calls(&self) -> Vec<CapturedCall> {
        self.captured_calls.read().clone()
    }

    pub fn call_count(&self) -> usize {
        self.captured_calls.read().len()
    }

    pub fn was_called(&self, subcommand: &str) -> bool {
        self.captured_calls
            .read()
            .iter()
            .any(|c| c.subcommand() == subcommand)
    }

    /// Argument lists of all calls, in order.
    pub fn invocations(&self) -> Vec<Vec<String>> {
        self.captured_calls
            .read()
            .iter()
            .map(|c| c.args.clone())
            .collect()
    }
}

impl ToolRunner for MockToolRunner {
    fn run(&self, working_dir: &Path, args: &[&str]) -> IacResult<()> {
        let call = CapturedCall {
            working_dir: working_dir.to_path_buf(),
            args: args.iter().map(|s| s.to_string()).collect(),
        };
        let subcommand = call.subcommand().to_string();
        self.captured_calls.write().push(call);

        match self.failures.read().get(&subcommand) {
            Some(&code) => Err(IacError::ToolFailed {
                command: format!("terraform {}", subcommand),
                code: Some(code),
            }),
            None => Ok(()),
        }
    }
}
