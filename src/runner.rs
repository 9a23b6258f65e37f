//! Bootstrap Flow
//!
//! The whole install sequence, run strictly in order: detect the host,
//! gate on git and Node.js (check, install, re-check, abort), sync the
//! repository, install its dependencies, best-effort install the
//! companion CLI, then hand off to the application's setup wizard.

use std::env;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::{write_manifest, BootstrapConfig};
use crate::error::BootstrapError;
use crate::exec::Runner;
use crate::host::detect_host;
use crate::launcher::ensure_companion_cli;
use crate::repo::{install_project_deps, sync_repository};
use crate::setup::banner::show_banner;
use crate::setup::handoff::run_handoff;
use crate::tools::check::{probe_git, probe_node};
use crate::tools::install::{refresh_login_path, Installer};
use crate::types::{BootstrapManifest, HostOs, Tool, ToolStatus};
use crate::ui;

/// Run the complete bootstrap. Any `Err` maps to exit code 1 in `main`.
pub fn run_bootstrap(config: &BootstrapConfig, runner: &dyn Runner) -> Result<()> {
    show_banner();

    // ---- 1. Detect host -----------------------------------------------------
    ui::step(1, 6, "Detecting operating system...");

    let host = detect_host(runner);
    if !host.os.is_supported() {
        if host.os == HostOs::Windows {
            ui::error("Native Windows is not supported. Install WSL and run this inside it.");
        } else {
            ui::error(&format!("Unrecognized operating system ({})", host.kernel));
        }
        return Err(BootstrapError::UnsupportedHost(host.os.as_str().to_string()).into());
    }

    ui::success(&format!("{} ({})", host.os.as_str(), host.arch));

    // ---- 2. Ensure git ------------------------------------------------------
    ui::step(2, 6, "Checking git...");
    let git_version = ensure_tool(runner, config, host.os, Tool::Git)?;

    // ---- 3. Ensure Node.js --------------------------------------------------
    ui::step(3, 6, "Checking Node.js...");
    let node_version = ensure_tool(runner, config, host.os, Tool::Node)?;

    // ---- 4. Sync repository + project dependencies --------------------------
    ui::step(4, 6, "Fetching EchoBridge...");

    let sync = sync_repository(runner, config)?;
    env::set_current_dir(&config.install_dir)
        .context("Failed to enter the install directory")?;
    install_project_deps(runner, config)?;

    // ---- 5. Companion CLI ---------------------------------------------------
    ui::step(5, 6, "Companion CLI...");

    let cli_installed = if config.skip_cli {
        ui::warning("Skipped (--skip-cli)");
        false
    } else {
        ensure_companion_cli(runner, config)?
    };

    let manifest = BootstrapManifest {
        host,
        git_version,
        node_version,
        companion_cli_installed: cli_installed,
        install_dir: config.install_dir.to_string_lossy().to_string(),
        repo_sync: sync.as_str().to_string(),
        completed_at: chrono::Utc::now().to_rfc3339(),
    };
    match write_manifest(config, &manifest) {
        Ok(path) => debug!("manifest written to {}", path.display()),
        Err(e) => ui::warning(&format!("Could not record the install manifest: {:#}", e)),
    }

    // ---- 6. Handoff ---------------------------------------------------------
    ui::step(6, 6, "Setup");
    run_handoff(runner, config)?;

    Ok(())
}

/// The check -> install -> re-check gate. Loops at most once; a re-check
/// that still fails aborts the whole flow.
///
/// Returns the tool's reported version string when available.
fn ensure_tool(
    runner: &dyn Runner,
    config: &BootstrapConfig,
    os: HostOs,
    tool: Tool,
) -> Result<Option<String>> {
    match probe(runner, config, tool) {
        ToolStatus::Present { version } => {
            if let Some(v) = &version {
                ui::success(&format!("{} found ({})", tool.label(), v));
            } else {
                ui::success(&format!("{} found", tool.label()));
            }
            return Ok(version);
        }
        ToolStatus::Missing => ui::warning(&format!("{} not found", tool.label())),
        ToolStatus::TooOld { found_major } => ui::warning(&format!(
            "{} v{} is too old (need >= {})",
            tool.label(),
            found_major,
            config.min_node_major
        )),
    }

    let Some(installer) = Installer::plan(os, tool) else {
        ui::error(&format!("No install strategy for {} on {}", tool.label(), os.as_str()));
        return Err(BootstrapError::ToolUnavailable {
            tool: tool.label().to_string(),
        }
        .into());
    };

    installer.apply(runner, tool, &config.node_install_target)?;

    // Installers may have edited shell profiles; pick up their PATH before
    // the re-check.
    if tool == Tool::Node {
        refresh_login_path(runner);
    }

    match probe(runner, config, tool) {
        ToolStatus::Present { version } => {
            if let Some(v) = &version {
                ui::success(&format!("{} installed ({})", tool.label(), v));
            } else {
                ui::success(&format!("{} installed", tool.label()));
            }
            Ok(version)
        }
        _ => {
            ui::error(&format!("{} is still unavailable", tool.label()));
            Err(BootstrapError::ToolUnavailable {
                tool: tool.label().to_string(),
            }
            .into())
        }
    }
}

fn probe(runner: &dyn Runner, config: &BootstrapConfig, tool: Tool) -> ToolStatus {
    match tool {
        Tool::Git => probe_git(runner),
        Tool::Node => probe_node(runner, config.min_node_major),
    }
}
