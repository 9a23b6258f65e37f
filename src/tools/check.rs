//! Tool Checks
//!
//! Probes a named executable for presence and, for Node.js, a minimum
//! major version. Absence and insufficient version both route the caller
//! to an install step; neither is fatal on its own.

use regex::Regex;

use crate::exec::Runner;
use crate::types::{Tool, ToolStatus};

/// Extract the major component from a version string like `v18.0.0`,
/// `18.19.1`, or `git version 2.43.0` (first number wins).
pub fn parse_major(version: &str) -> Option<u32> {
    let re = Regex::new(r"v?(\d+)").ok()?;
    re.captures(version.trim())?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

/// Run `<binary> --version` and return its output, or `None` when the
/// binary is absent or refuses to report a version.
pub fn probe_binary(runner: &dyn Runner, binary: &str) -> Option<String> {
    runner
        .run(binary, &["--version"])
        .ok()
        .filter(|out| out.success())
        .map(|out| out.stdout.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Presence check for git. No version requirement.
pub fn probe_git(runner: &dyn Runner) -> ToolStatus {
    match probe_binary(runner, Tool::Git.binary()) {
        Some(version) => ToolStatus::Present {
            version: Some(version),
        },
        None => ToolStatus::Missing,
    }
}

/// Presence + version check for the Node.js runtime.
pub fn probe_node(runner: &dyn Runner, min_major: u32) -> ToolStatus {
    let Some(version) = probe_binary(runner, Tool::Node.binary()) else {
        return ToolStatus::Missing;
    };
    node_status_from_version(&version, min_major)
}

/// Classify a reported node version string against the minimum major.
pub fn node_status_from_version(version: &str, min_major: u32) -> ToolStatus {
    match parse_major(version) {
        Some(major) if major >= min_major => ToolStatus::Present {
            version: Some(version.trim().to_string()),
        },
        Some(major) => ToolStatus::TooOld { found_major: major },
        // Unparseable output counts as missing so an install is attempted.
        None => ToolStatus::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_major() {
        assert_eq!(parse_major("v17.2.0"), Some(17));
        assert_eq!(parse_major("v18.0.0"), Some(18));
        assert_eq!(parse_major("18.19.1"), Some(18));
        assert_eq!(parse_major("git version 2.43.0"), Some(2));
        assert_eq!(parse_major("nonsense"), None);
        assert_eq!(parse_major(""), None);
    }

    #[test]
    fn test_node_below_threshold_is_too_old() {
        assert_eq!(
            node_status_from_version("v17.2.0", 18),
            ToolStatus::TooOld { found_major: 17 }
        );
    }

    #[test]
    fn test_node_at_threshold_passes() {
        let status = node_status_from_version("v18.0.0", 18);
        assert!(status.is_present());
        assert_eq!(status.version(), Some("v18.0.0"));
    }

    #[test]
    fn test_node_above_threshold_passes() {
        assert!(node_status_from_version("v22.11.0", 18).is_present());
    }

    #[test]
    fn test_garbage_version_is_missing() {
        assert_eq!(node_status_from_version("not a version", 18), ToolStatus::Missing);
    }
}
