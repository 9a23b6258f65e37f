//! Repository Sync
//!
//! Clone-or-update for the application repository, then its npm
//! dependency install. An existing checkout is fast-forwarded and a pull
//! failure is tolerated (the operator may have diverged on purpose); a
//! failed fresh clone is fatal because nothing usable is on disk.

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::config::BootstrapConfig;
use crate::exec::{error_output, Runner};
use crate::types::SyncOutcome;
use crate::ui;

/// What the sync step will do, decided from install-dir existence alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncAction {
    Update,
    Clone,
}

pub fn sync_action(install_dir_exists: bool) -> SyncAction {
    if install_dir_exists {
        SyncAction::Update
    } else {
        SyncAction::Clone
    }
}

/// Bring the install directory up to date with the remote.
pub fn sync_repository(runner: &dyn Runner, config: &BootstrapConfig) -> Result<SyncOutcome> {
    let dir = config.install_dir.to_string_lossy().to_string();

    match sync_action(config.install_dir.exists()) {
        SyncAction::Update => {
            debug!("existing checkout at {}, fast-forwarding", dir);
            let out = runner.run("git", &["-C", dir.as_str(), "pull", "--ff-only"])?;

            if out.success() {
                ui::success(&format!("Updated existing checkout at {}", dir));
                Ok(SyncOutcome::Updated)
            } else {
                ui::warning(&format!(
                    "Could not fast-forward {} ({}); keeping it as-is",
                    dir,
                    error_output(&out)
                ));
                Ok(SyncOutcome::UpdateSkipped)
            }
        }
        SyncAction::Clone => {
            debug!("cloning {} into {}", config.repo_url, dir);
            let out = runner.run("git", &["clone", config.repo_url.as_str(), dir.as_str()])?;

            if !out.success() {
                bail!("git clone failed: {}", error_output(&out));
            }

            ui::success(&format!("Cloned EchoBridge into {}", dir));
            Ok(SyncOutcome::Cloned)
        }
    }
}

/// Install the application's npm dependencies inside the install directory.
pub fn install_project_deps(runner: &dyn Runner, config: &BootstrapConfig) -> Result<()> {
    let code = runner
        .run_interactive("npm", &["install"], Some(&config.install_dir))
        .context("Failed to run npm install")?;

    if code != 0 {
        bail!("npm install exited with status {}", code);
    }

    ui::success("Project dependencies installed");
    Ok(())
}
