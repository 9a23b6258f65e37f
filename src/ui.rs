//! Console Annotations
//!
//! The three operator-facing severities, plus the numbered step header
//! used by the bootstrap flow.

use colored::Colorize;

pub fn success(msg: &str) {
    println!("{}", format!("  {} {}", "\u{2713}", msg).green());
}

pub fn warning(msg: &str) {
    println!("{}", format!("  {} {}", "!", msg).yellow());
}

pub fn error(msg: &str) {
    eprintln!("{}", format!("  {} {}", "\u{2717}", msg).red());
}

pub fn step(n: u32, total: u32, label: &str) {
    println!("{}", format!("\n  [{}/{}] {}", n, total, label).cyan());
}
