//! Host Detection
//!
//! Classifies the running machine as macOS, Linux, WSL, Windows, or
//! unknown. WSL is Linux with a Microsoft marker in the kernel version
//! metadata. Detection never fails; anything unrecognized is `Unknown`
//! and the caller decides whether that aborts the flow.

use std::env;
use std::fs;

use crate::exec::Runner;
use crate::types::{HostInfo, HostOs};

/// Map kernel metadata to a host classification.
///
/// `kernel_name` is what `uname -s` reports; `kernel_version` is the
/// kernel version string (`/proc/version` contents or `uname -r`), which
/// on WSL carries a "microsoft" marker.
pub fn classify_kernel(kernel_name: &str, kernel_version: &str) -> HostOs {
    let name = kernel_name.trim().to_ascii_lowercase();

    match name.as_str() {
        "darwin" => HostOs::Macos,
        "linux" => {
            if kernel_version.to_ascii_lowercase().contains("microsoft") {
                HostOs::Wsl
            } else {
                HostOs::Linux
            }
        }
        "windows_nt" => HostOs::Windows,
        _ if name.starts_with("mingw") || name.starts_with("msys") || name.starts_with("cygwin") => {
            HostOs::Windows
        }
        _ => HostOs::Unknown,
    }
}

/// Probe the running system and classify it.
pub fn detect_host(runner: &dyn Runner) -> HostInfo {
    let kernel = probe(runner, &["-s"]).unwrap_or_else(fallback_kernel_name);

    // /proc/version names the full kernel build, which is where WSL
    // identifies itself. Not present on macOS; uname -r covers the rest.
    let kernel_version = fs::read_to_string("/proc/version")
        .ok()
        .map(|s| s.trim().to_string())
        .or_else(|| probe(runner, &["-r"]))
        .unwrap_or_default();

    let arch = probe(runner, &["-m"]).unwrap_or_else(|| env::consts::ARCH.to_string());

    HostInfo {
        os: classify_kernel(&kernel, &kernel_version),
        arch,
        kernel,
    }
}

fn probe(runner: &dyn Runner, args: &[&str]) -> Option<String> {
    runner
        .run("uname", args)
        .ok()
        .filter(|out| out.success())
        .map(|out| out.stdout.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// When `uname` itself is unavailable, fall back to the compile-time
/// platform tag.
fn fallback_kernel_name() -> String {
    match env::consts::OS {
        "macos" => "Darwin",
        "linux" => "Linux",
        "windows" => "Windows_NT",
        other => other,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darwin_is_macos() {
        assert_eq!(classify_kernel("Darwin", "Darwin Kernel Version 23.1.0"), HostOs::Macos);
    }

    #[test]
    fn test_plain_linux() {
        assert_eq!(
            classify_kernel("Linux", "Linux version 6.5.0-14-generic (buildd@lcy02)"),
            HostOs::Linux
        );
    }

    #[test]
    fn test_wsl_marker_in_kernel_version() {
        assert_eq!(
            classify_kernel("Linux", "Linux version 5.15.153.1-microsoft-standard-WSL2"),
            HostOs::Wsl
        );
        // Older WSL kernels capitalize the marker.
        assert_eq!(
            classify_kernel("Linux", "Linux version 4.4.0-19041-Microsoft"),
            HostOs::Wsl
        );
    }

    #[test]
    fn test_windows_shells() {
        assert_eq!(classify_kernel("Windows_NT", ""), HostOs::Windows);
        assert_eq!(classify_kernel("MINGW64_NT-10.0-19045", ""), HostOs::Windows);
        assert_eq!(classify_kernel("MSYS_NT-10.0", ""), HostOs::Windows);
        assert_eq!(classify_kernel("CYGWIN_NT-10.0", ""), HostOs::Windows);
    }

    #[test]
    fn test_unrecognized_is_unknown() {
        assert_eq!(classify_kernel("SunOS", ""), HostOs::Unknown);
        assert_eq!(classify_kernel("FreeBSD", ""), HostOs::Unknown);
        assert_eq!(classify_kernel("", ""), HostOs::Unknown);
    }
}
