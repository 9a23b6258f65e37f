//! Setup Handoff
//!
//! The terminal step: one yes/no prompt (default yes) deciding whether to
//! launch EchoBridge's own interactive setup wizard right away. Declining
//! is a normal exit; the operator gets the manual command instead.

use anyhow::{bail, Result};
use colored::Colorize;

use crate::config::BootstrapConfig;
use crate::exec::Runner;
use crate::setup::prompts;
use crate::ui;

/// Ask (unless `--yes`), then either run the wizard or print the manual
/// follow-up command.
pub fn run_handoff(runner: &dyn Runner, config: &BootstrapConfig) -> Result<()> {
    let run_now = if config.assume_yes {
        true
    } else {
        prompts::confirm("Launch the EchoBridge setup wizard now?", true)?
    };

    finish(runner, config, run_now)
}

/// Carry out the handoff decision.
pub fn finish(runner: &dyn Runner, config: &BootstrapConfig, run_now: bool) -> Result<()> {
    if !run_now {
        println!(
            "\n  Setup skipped. Run it anytime with:\n\n    {}\n",
            format!("cd {} && npm run setup", config.install_dir.display()).white()
        );
        return Ok(());
    }

    ui::success("Handing off to the EchoBridge setup wizard\n");

    let code = runner.run_interactive("npm", &["run", "setup"], Some(&config.install_dir))?;
    if code != 0 {
        bail!("setup wizard exited with status {}", code);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use crate::types::ExecOutput;
    use std::cell::RefCell;
    use std::path::Path;

    struct RecordingRunner {
        interactive_calls: RefCell<Vec<String>>,
    }

    impl Runner for RecordingRunner {
        fn run(&self, _program: &str, _args: &[&str]) -> Result<ExecOutput> {
            Ok(ExecOutput {
                stdout: String::new(),
                stderr: String::new(),
                exit_code: 0,
            })
        }

        fn run_login_shell(&self, _script: &str) -> Result<ExecOutput> {
            Ok(ExecOutput {
                stdout: String::new(),
                stderr: String::new(),
                exit_code: 0,
            })
        }

        fn run_interactive(&self, program: &str, args: &[&str], _cwd: Option<&Path>) -> Result<i32> {
            self.interactive_calls
                .borrow_mut()
                .push(format!("{} {}", program, args.join(" ")));
            Ok(0)
        }
    }

    #[test]
    fn test_decline_skips_wizard_and_returns_ok() {
        let runner = RecordingRunner {
            interactive_calls: RefCell::new(Vec::new()),
        };
        let config = default_config();

        finish(&runner, &config, false).unwrap();
        assert!(runner.interactive_calls.borrow().is_empty());
    }

    #[test]
    fn test_accept_runs_wizard() {
        let runner = RecordingRunner {
            interactive_calls: RefCell::new(Vec::new()),
        };
        let config = default_config();

        finish(&runner, &config, true).unwrap();
        assert_eq!(
            runner.interactive_calls.borrow().as_slice(),
            ["npm run setup"]
        );
    }
}
