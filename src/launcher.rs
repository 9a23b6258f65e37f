//! Companion CLI
//!
//! Installs the separately distributed EchoBridge CLI through npm. The
//! step is optional: a failed global install is a warning, never an
//! abort, since the application runs without it.

use anyhow::Result;

use crate::config::BootstrapConfig;
use crate::exec::Runner;
use crate::tools::check::probe_binary;
use crate::ui;

/// Make sure the companion CLI is on PATH, installing it if needed.
/// Returns whether the CLI ended up available.
pub fn ensure_companion_cli(runner: &dyn Runner, config: &BootstrapConfig) -> Result<bool> {
    if let Some(version) = probe_binary(runner, &config.cli_binary) {
        ui::success(&format!("{} already installed ({})", config.cli_binary, version));
        return Ok(true);
    }

    ui::warning(&format!("Installing {}...", config.cli_package));
    let code = runner.run_interactive("npm", &["install", "-g", config.cli_package.as_str()], None)?;

    if code == 0 && probe_binary(runner, &config.cli_binary).is_some() {
        ui::success(&format!("{} installed", config.cli_binary));
        return Ok(true);
    }

    ui::warning(&format!(
        "Could not install {}. You can add it later with: npm install -g {}",
        config.cli_package, config.cli_package
    ));
    Ok(false)
}
