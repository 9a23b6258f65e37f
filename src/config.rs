//! Bootstrap Configuration
//!
//! One explicit configuration struct passed between steps. Defaults point
//! at the public EchoBridge repository and `~/echobridge`; the CLI can
//! override the install directory and the prompt/CLI behavior.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::types::BootstrapManifest;

/// Public repository of the EchoBridge application.
pub const REPO_URL: &str = "https://github.com/echobridge/echobridge.git";

/// npm package that distributes the companion CLI.
pub const CLI_PACKAGE: &str = "echobridge-cli";

/// Binary the companion CLI installs on PATH.
pub const CLI_BINARY: &str = "echobridge";

/// Minimum Node.js major version the application supports.
pub const MIN_NODE_MAJOR: u32 = 18;

/// Node.js version the installer asks a version manager for.
pub const NODE_INSTALL_TARGET: &str = "22";

/// Manifest file name within the state directory.
const MANIFEST_FILENAME: &str = "bootstrap.json";

/// Everything the bootstrap steps need to know, resolved up front.
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    pub repo_url: String,
    /// Where the application repository is cloned, `~/echobridge` by default.
    pub install_dir: PathBuf,
    /// Where bootstrap state (the manifest) lives, `~/.echobridge`.
    pub state_dir: PathBuf,
    pub min_node_major: u32,
    pub node_install_target: String,
    pub cli_package: String,
    pub cli_binary: String,
    /// Answer the final prompt affirmatively without reading stdin.
    pub assume_yes: bool,
    /// Skip the companion CLI step entirely.
    pub skip_cli: bool,
}

/// Build the default configuration rooted in the invoking user's home.
pub fn default_config() -> BootstrapConfig {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/root"));

    BootstrapConfig {
        repo_url: REPO_URL.to_string(),
        install_dir: home.join("echobridge"),
        state_dir: home.join(".echobridge"),
        min_node_major: MIN_NODE_MAJOR,
        node_install_target: NODE_INSTALL_TARGET.to_string(),
        cli_package: CLI_PACKAGE.to_string(),
        cli_binary: CLI_BINARY.to_string(),
        assume_yes: false,
        skip_cli: false,
    }
}

/// Resolve a path that may start with `~` to an absolute path.
pub fn resolve_path(p: &str) -> PathBuf {
    if let Some(rest) = p.strip_prefix('~') {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/root"));
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        home.join(rest)
    } else {
        PathBuf::from(p)
    }
}

/// Write the install manifest to `<state_dir>/bootstrap.json`.
///
/// Creates the state directory if needed. Callers treat failure as a
/// warning; a missing manifest never invalidates the install itself.
pub fn write_manifest(config: &BootstrapConfig, manifest: &BootstrapManifest) -> Result<PathBuf> {
    if !config.state_dir.exists() {
        fs::create_dir_all(&config.state_dir).context("Failed to create state directory")?;
    }

    let path = config.state_dir.join(MANIFEST_FILENAME);
    let json = serde_json::to_string_pretty(manifest).context("Failed to serialize manifest")?;
    fs::write(&path, json).context("Failed to write manifest file")?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_with_tilde() {
        let resolved = resolve_path("~/some/path");
        assert!(!resolved.to_string_lossy().starts_with('~'));
        assert!(resolved.ends_with("some/path"));
    }

    #[test]
    fn test_resolve_path_without_tilde() {
        let path = "/absolute/path/to/file";
        assert_eq!(resolve_path(path), PathBuf::from(path));
    }

    #[test]
    fn test_default_config_paths() {
        let config = default_config();
        assert!(config.install_dir.ends_with("echobridge"));
        assert!(config.state_dir.ends_with(".echobridge"));
        assert_eq!(config.min_node_major, 18);
        assert_eq!(config.cli_binary, "echobridge");
        assert!(!config.assume_yes);
    }

    #[test]
    fn test_write_manifest_round_trip() {
        use crate::types::{HostInfo, HostOs};

        let mut config = default_config();
        config.state_dir = std::env::temp_dir().join("bridgeup-test-state");

        let manifest = BootstrapManifest {
            host: HostInfo {
                os: HostOs::Linux,
                arch: "x86_64".to_string(),
                kernel: "Linux".to_string(),
            },
            git_version: Some("git version 2.43.0".to_string()),
            node_version: Some("v22.1.0".to_string()),
            companion_cli_installed: true,
            install_dir: "/home/op/echobridge".to_string(),
            repo_sync: "cloned".to_string(),
            completed_at: "2026-01-01T00:00:00+00:00".to_string(),
        };

        let path = write_manifest(&config, &manifest).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: BootstrapManifest = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.repo_sync, "cloned");
        assert_eq!(parsed.host.os, HostOs::Linux);

        let _ = std::fs::remove_dir_all(&config.state_dir);
    }
}
