//! Prompts
//!
//! Interactive terminal prompts. Uses the `dialoguer` crate for input
//! handling.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

/// Ask a yes/no question with the given default answer.
pub fn confirm(label: &str, default: bool) -> Result<bool> {
    let answer = Confirm::new()
        .with_prompt(format!("  {} {}", "\u{2192}".cyan(), label.white()))
        .default(default)
        .interact()?;

    Ok(answer)
}
