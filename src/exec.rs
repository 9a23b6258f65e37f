//! Process Execution
//!
//! Thin wrappers over `std::process::Command` behind a trait seam so the
//! bootstrap steps can be exercised in tests without spawning anything.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use tracing::debug;

use crate::types::ExecOutput;

/// Seam between the bootstrap logic and the host system.
///
/// `run` captures output and reports the exit code without failing on it;
/// callers decide what a non-zero exit means. `Err` is reserved for the
/// process not starting at all (binary missing, spawn failure).
pub trait Runner {
    /// Run a program with captured stdout/stderr.
    fn run(&self, program: &str, args: &[&str]) -> Result<ExecOutput>;

    /// Run a script through a login shell (`bash -lc`), so installer
    /// pipelines and freshly written shell profiles take effect.
    fn run_login_shell(&self, script: &str) -> Result<ExecOutput>;

    /// Run a program with inherited stdio, returning its exit code.
    /// Used for package installs and the downstream setup wizard.
    fn run_interactive(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<i32>;
}

/// The real thing: spawns child processes on the host.
pub struct HostRunner;

impl Runner for HostRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<ExecOutput> {
        debug!("exec: {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("Failed to execute {} {}", program, args.join(" ")))?;

        Ok(ExecOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }

    fn run_login_shell(&self, script: &str) -> Result<ExecOutput> {
        debug!("exec (login shell): {}", script);

        let output = Command::new("bash")
            .args(["-lc", script])
            .output()
            .context("Failed to execute login shell")?;

        Ok(ExecOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }

    fn run_interactive(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<i32> {
        debug!("exec (interactive): {} {}", program, args.join(" "));

        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to execute {} {}", program, args.join(" ")))?;

        Ok(status.code().unwrap_or(-1))
    }
}

/// Pick the more informative of stderr/stdout for an error message.
pub fn error_output(out: &ExecOutput) -> &str {
    if out.stderr.trim().is_empty() {
        out.stdout.trim()
    } else {
        out.stderr.trim()
    }
}
