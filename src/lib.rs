//! Bridgeup -- EchoBridge Bootstrap Installer
//!
//! Detects the host, ensures git and Node.js are available, syncs the
//! EchoBridge repository, installs its dependencies, and hands off to the
//! application's own setup wizard.

pub mod types;
pub mod error;
pub mod config;
pub mod exec;
pub mod ui;
pub mod host;
pub mod tools;
pub mod repo;
pub mod launcher;
pub mod setup;
pub mod runner;
