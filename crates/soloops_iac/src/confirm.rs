//! Confirmation policies for destructive or billable operations.
//!
//! Provisioning code asks a [`Confirmation`] before it proceeds. The CLI
//! injects [`Prompt`] for interactive use and [`AutoApprove`] when the user
//! passed `--auto-approve`.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use parking_lot::Mutex;
use tracing::debug;

use crate::error::{IacError, IacResult};

/// What to ask and which answers count as consent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub warning: &'static str,
    pub prompt: &'static str,
    /// Accepted answers, lowercase. Input is trimmed and lowercased first.
    pub accepted: &'static [&'static str],
}

impl ConfirmRequest {
    pub const APPLY: ConfirmRequest = ConfirmRequest {
        warning: "⚠️  This will provision real infrastructure and may incur costs.",
        prompt: "Do you want to continue? (yes/no): ",
        accepted: &["yes", "y"],
    };

    pub const DESTROY: ConfirmRequest = ConfirmRequest {
        warning: "⚠️  WARNING: This will DESTROY all provisioned infrastructure!",
        prompt: "Type 'destroy' to confirm: ",
        accepted: &["destroy"],
    };

    pub fn accepts(&self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        self.accepted.contains(&answer.as_str())
    }
}

/// A policy deciding whether an operation may proceed.
pub trait Confirmation: Send + Sync {
    fn confirm(&self, request: &ConfirmRequest) -> IacResult<bool>;

    /// True when consent is given without asking anyone. The external tool
    /// is then told to skip its own prompt as well.
    fn is_automatic(&self) -> bool {
        false
    }
}

/// Approves everything without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoApprove;

impl Confirmation for AutoApprove {
    fn confirm(&self, request: &ConfirmRequest) -> IacResult<bool> {
        debug!("Auto-approving: {}", request.prompt.trim());
        Ok(true)
    }

    fn is_automatic(&self) -> bool {
        true
    }
}

/// Asks on a writer and blocks on one line from a reader.
pub struct Prompt<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    /// Consume the prompt and return its writer, e.g. to inspect what was shown.
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}

impl Prompt<BufReader<Stdin>, Stdout> {
    /// Prompt on the process's own terminal.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> Confirmation for Prompt<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn confirm(&self, request: &ConfirmRequest) -> IacResult<bool> {
        {
            let mut out = self.output.lock();
            write!(out, "\n{}\n{}", request.warning, request.prompt)
                .and_then(|_| out.flush())
                .map_err(IacError::Confirmation)?;
        }

        // End of input counts as "no".
        let mut answer = String::new();
        self.input
            .lock()
            .read_line(&mut answer)
            .map_err(IacError::Confirmation)?;

        Ok(request.accepts(&answer))
    }
}
