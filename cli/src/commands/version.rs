//! # Fly Version Handler
//!
//! File: cli/src/commands/version.rs
//!
//! Implements `fly version`. With `-v` the commit and build date are printed
//! as well.
//!
use crate::core::{error::Result, version};
use clap::Parser;

/// Arguments for `fly version` (none; detail follows the global `-v`).
#[derive(Parser, Debug)]
#[command(about = "Print the version number of fly-cli")]
pub struct VersionArgs {}

pub fn handle_version(_args: VersionArgs, verbose: u8) -> Result<()> {
    for line in version_lines(verbose) {
        println!("{}", line);
    }
    Ok(())
}

fn version_lines(verbose: u8) -> Vec<String> {
    let mut lines = vec![format!("fly-cli version {}", version::VERSION)];
    if verbose > 0 {
        lines.push(format!("commit: {}", version::COMMIT_HASH));
        lines.push(format!("built: {}", version::BUILD_DATE));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_lines() {
        let short = version_lines(0);
        assert_eq!(short, vec![format!("fly-cli version {}", version::VERSION)]);

        let long = version_lines(1);
        assert_eq!(long.len(), 3);
        assert!(long[1].starts_with("commit: "));
    }
}
