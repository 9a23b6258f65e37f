//! Bootstrap Errors
//!
//! The two unrecoverable conditions the flow can end on. Everything else
//! travels as `anyhow::Error` with context.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The detector classified the host as something the flow cannot run on.
    #[error("unsupported operating system: {0}")]
    UnsupportedHost(String),

    /// A prerequisite was still missing or too old after an install attempt.
    #[error("{tool} is still unavailable after the install attempt")]
    ToolUnavailable { tool: String },
}
