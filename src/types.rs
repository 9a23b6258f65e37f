//! Bridgeup - Type Definitions
//!
//! Shared types for the bootstrap flow: host classification, tool
//! probe results, and the install manifest written after a successful run.

use serde::{Deserialize, Serialize};

// ─── Host ────────────────────────────────────────────────────────

/// The operating systems the detector can report.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    Macos,
    Linux,
    Wsl,
    Windows,
    Unknown,
}

impl HostOs {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostOs::Macos => "macos",
            HostOs::Linux => "linux",
            HostOs::Wsl => "wsl",
            HostOs::Windows => "windows",
            HostOs::Unknown => "unknown",
        }
    }

    /// Whether the rest of the bootstrap flow can run on this host.
    pub fn is_supported(&self) -> bool {
        matches!(self, HostOs::Macos | HostOs::Linux | HostOs::Wsl)
    }
}

/// What the detector learned about the running machine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostInfo {
    pub os: HostOs,
    /// CPU architecture string, e.g. "x86_64" or "arm64".
    pub arch: String,
    /// Raw kernel name as reported by the system, e.g. "Darwin".
    pub kernel: String,
}

// ─── Tools ───────────────────────────────────────────────────────

/// The prerequisite tools the bootstrap checks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Git,
    Node,
}

impl Tool {
    /// Binary name to probe on PATH.
    pub fn binary(&self) -> &'static str {
        match self {
            Tool::Git => "git",
            Tool::Node => "node",
        }
    }

    /// Human-readable name for console messages.
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Git => "git",
            Tool::Node => "Node.js",
        }
    }
}

/// Result of probing a tool on the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolStatus {
    /// Found and (where version-sensitive) new enough.
    Present { version: Option<String> },
    /// Not on PATH.
    Missing,
    /// Found but below the minimum major version.
    TooOld { found_major: u32 },
}

impl ToolStatus {
    pub fn is_present(&self) -> bool {
        matches!(self, ToolStatus::Present { .. })
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            ToolStatus::Present { version } => version.as_deref(),
            _ => None,
        }
    }
}

// ─── Process execution ───────────────────────────────────────────

/// Captured output of a finished child process.
#[derive(Clone, Debug)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

// ─── Repository sync ─────────────────────────────────────────────

/// How the repository sync step ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Fresh clone into the install directory.
    Cloned,
    /// Existing checkout fast-forwarded from the remote.
    Updated,
    /// Existing checkout left as-is (pull failed, e.g. diverged history).
    UpdateSkipped,
}

impl SyncOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncOutcome::Cloned => "cloned",
            SyncOutcome::Updated => "updated",
            SyncOutcome::UpdateSkipped => "update-skipped",
        }
    }
}

// ─── Manifest ────────────────────────────────────────────────────

/// Record of what a bootstrap run installed, written to the state
/// directory on success.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapManifest {
    pub host: HostInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_version: Option<String>,
    pub companion_cli_installed: bool,
    pub install_dir: String,
    pub repo_sync: String,
    pub completed_at: String,
}
