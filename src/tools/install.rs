//! Tool Installers
//!
//! Per-OS install strategies for the prerequisite tools. Each strategy is
//! a variant holding the command sequence it runs; selection is a single
//! table lookup instead of nested conditionals. Installs are best-effort:
//! failure here only surfaces through the caller's re-check.

use anyhow::Result;
use tracing::{debug, warn};

use crate::exec::Runner;
use crate::types::{HostOs, Tool};
use crate::ui;

/// Version of the nvm install script the vendor publishes.
const NVM_INSTALL_URL: &str =
    "https://raw.githubusercontent.com/nvm-sh/nvm/v0.40.3/install.sh";

/// An installation strategy for a missing or outdated tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Installer {
    /// Homebrew, the native package manager on macOS.
    Brew,
    /// apt-get, for Debian-flavored Linux and WSL distributions.
    AptGet,
    /// The nvm version manager, fetched with the vendor's curl installer.
    NvmScript,
}

impl Installer {
    pub fn label(&self) -> &'static str {
        match self {
            Installer::Brew => "Homebrew",
            Installer::AptGet => "apt-get",
            Installer::NvmScript => "nvm",
        }
    }

    /// Select the strategy for installing `tool` on `os`. `None` means the
    /// host has no viable strategy and the gate fails immediately.
    pub fn plan(os: HostOs, tool: Tool) -> Option<Installer> {
        match (os, tool) {
            (HostOs::Macos, _) => Some(Installer::Brew),
            (HostOs::Linux | HostOs::Wsl, Tool::Git) => Some(Installer::AptGet),
            (HostOs::Linux | HostOs::Wsl, Tool::Node) => Some(Installer::NvmScript),
            (HostOs::Windows | HostOs::Unknown, _) => None,
        }
    }

    /// Run this strategy's command sequence for `tool`.
    ///
    /// A non-zero exit is logged but not returned as an error; the caller's
    /// re-check decides whether the install actually worked. `Err` means a
    /// command could not be spawned at all.
    pub fn apply(&self, runner: &dyn Runner, tool: Tool, node_target: &str) -> Result<()> {
        ui::warning(&format!(
            "Installing {} via {}...",
            tool.label(),
            self.label()
        ));

        match self {
            Installer::Brew => {
                let code = runner.run_interactive("brew", &["install", tool.binary()], None)?;
                if code != 0 {
                    warn!("brew install {} exited with status {}", tool.binary(), code);
                }
            }
            Installer::AptGet => {
                let code = runner.run_interactive("sudo", &["apt-get", "update"], None)?;
                if code != 0 {
                    warn!("apt-get update exited with status {}", code);
                }
                let code = runner.run_interactive(
                    "sudo",
                    &["apt-get", "install", "-y", tool.binary()],
                    None,
                )?;
                if code != 0 {
                    warn!("apt-get install {} exited with status {}", tool.binary(), code);
                }
            }
            Installer::NvmScript => {
                let fetch = format!("curl -o- {} | bash", NVM_INSTALL_URL);
                let out = runner.run_login_shell(&fetch)?;
                if !out.success() {
                    warn!("nvm installer exited with status {}", out.exit_code);
                }

                // nvm is a shell function, so the install has to happen in a
                // shell that has sourced it.
                let install = format!(
                    "export NVM_DIR=\"$HOME/.nvm\"; \
                     [ -s \"$NVM_DIR/nvm.sh\" ] && . \"$NVM_DIR/nvm.sh\"; \
                     nvm install {} && nvm alias default {}",
                    node_target, node_target
                );
                let out = runner.run_login_shell(&install)?;
                if !out.success() {
                    warn!("nvm install {} exited with status {}", node_target, out.exit_code);
                }
            }
        }

        Ok(())
    }
}

/// Adopt a login shell's view of PATH so re-checks see tools that an
/// installer placed behind a profile edit (`~/.bashrc`, `~/.zshrc`).
/// Best-effort; the current PATH stays in place on any failure.
pub fn refresh_login_path(runner: &dyn Runner) {
    match runner.run_login_shell("echo $PATH") {
        Ok(out) if out.success() => {
            let path = out.stdout.trim();
            if !path.is_empty() {
                debug!("refreshed PATH from login shell");
                std::env::set_var("PATH", path);
            }
        }
        Ok(out) => debug!("login shell PATH probe exited with status {}", out.exit_code),
        Err(e) => debug!("login shell PATH probe failed: {:#}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macos_uses_brew_for_everything() {
        assert_eq!(Installer::plan(HostOs::Macos, Tool::Git), Some(Installer::Brew));
        assert_eq!(Installer::plan(HostOs::Macos, Tool::Node), Some(Installer::Brew));
    }

    #[test]
    fn test_linux_splits_by_tool() {
        assert_eq!(Installer::plan(HostOs::Linux, Tool::Git), Some(Installer::AptGet));
        assert_eq!(Installer::plan(HostOs::Linux, Tool::Node), Some(Installer::NvmScript));
    }

    #[test]
    fn test_wsl_matches_linux() {
        assert_eq!(
            Installer::plan(HostOs::Wsl, Tool::Git),
            Installer::plan(HostOs::Linux, Tool::Git)
        );
        assert_eq!(
            Installer::plan(HostOs::Wsl, Tool::Node),
            Installer::plan(HostOs::Linux, Tool::Node)
        );
    }

    #[test]
    fn test_unsupported_hosts_have_no_plan() {
        assert_eq!(Installer::plan(HostOs::Windows, Tool::Git), None);
        assert_eq!(Installer::plan(HostOs::Unknown, Tool::Node), None);
    }
}
