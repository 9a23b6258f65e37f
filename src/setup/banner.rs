//! Banner
//!
//! The greeting printed before the bootstrap steps start.

use colored::Colorize;

const BANNER: &str = r"
  ______     _           ____       _     _
 |  ____|   | |         |  _ \     (_)   | |
 | |__   ___| |__   ___ | |_) |_ __ _  __| | __ _  ___
 |  __| / __| '_ \ / _ \|  _ <| '__| |/ _` |/ _` |/ _ \
 | |___| (__| | | | (_) | |_) | |  | | (_| | (_| |  __/
 |______\___|_| |_|\___/|____/|_|  |_|\__,_|\__, |\___|
                                             __/ |
                                            |___/
";

pub fn show_banner() {
    println!("{}", BANNER.cyan());
    println!(
        "{}",
        "  EchoBridge installer. This sets up the bridge and its prerequisites.\n".white()
    );
}
