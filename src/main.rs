//! Bridgeup
//!
//! The entry point: parse flags, initialize logging, run the bootstrap
//! flow, and map failures to exit code 1.

use clap::Parser;
use tracing::Level;

use bridgeup::config::{default_config, resolve_path};
use bridgeup::exec::HostRunner;
use bridgeup::runner::run_bootstrap;
use bridgeup::ui;

/// Bridgeup -- EchoBridge Bootstrap Installer
#[derive(Parser, Debug)]
#[command(
    name = "bridgeup",
    version,
    about = "Install the EchoBridge chat bridge and its prerequisites"
)]
struct Cli {
    /// Answer the final prompt with yes (non-interactive)
    #[arg(long)]
    yes: bool,

    /// Skip installing the companion CLI
    #[arg(long)]
    skip_cli: bool,

    /// Clone the repository here instead of ~/echobridge
    #[arg(long, value_name = "PATH")]
    install_dir: Option<String>,

    /// Show the commands being run
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_target(false)
        .init();

    let mut config = default_config();
    config.assume_yes = cli.yes;
    config.skip_cli = cli.skip_cli;
    if let Some(dir) = &cli.install_dir {
        config.install_dir = resolve_path(dir);
    }

    if let Err(e) = run_bootstrap(&config, &HostRunner) {
        ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
