//! # Fly UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal output shared by several commands: the guidance shown when no
//! manifest can be found, check-mark status lines for `fly status`, and the
//! confirmation prompt used by `fly update` (via `dialoguer` on a terminal,
//! a plain line read from stdin otherwise).
//!
use crate::core::error::Result;
use anyhow::Context;
use dialoguer::Confirm;
use std::io::{self, BufRead, IsTerminal, Write};

/// Explains how to target a site after a failed manifest lookup.
pub fn print_no_manifest_help() {
    println!("No docker-compose.yml file found!");
    println!();
    println!("You are not inside a site directory.");
    println!("Please run this command from inside a site directory, e.g:");
    println!("  cd ~/example.com");
    println!("  fly start");
    println!();
    println!("Or specify the domain name:");
    println!("  fly start --domain example.com");
}

/// Formats one pass/fail line.
pub fn status_line(ok: bool, message: &str) -> String {
    format!("{} {}", if ok { "✅" } else { "❌" }, message)
}

/// Asks a yes/no question, defaulting to "no".
///
/// When stdin is not a terminal (e.g. `echo y | fly update`), one line is
/// read from it instead of opening an interactive prompt.
pub fn confirm(prompt: &str) -> Result<bool> {
    if io::stdin().is_terminal() {
        return Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .context("Failed to read confirmation from the terminal");
    }
    print!("{} (y/n): ", prompt);
    io::stdout().flush().context("Failed to flush stdout")?;
    read_answer(&mut io::stdin().lock())
}

fn read_answer(input: &mut impl BufRead) -> Result<bool> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read confirmation from stdin")?;
    Ok(is_yes(&line))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_status_line() {
        assert_eq!(status_line(true, "Docker is running"), "✅ Docker is running");
        assert_eq!(
            status_line(false, "Nginx directory does not exist"),
            "❌ Nginx directory does not exist"
        );
    }

    #[test]
    fn test_piped_answers() {
        assert!(read_answer(&mut Cursor::new("y\n")).unwrap());
        assert!(read_answer(&mut Cursor::new(" YES \n")).unwrap());
        assert!(!read_answer(&mut Cursor::new("n\n")).unwrap());
        assert!(!read_answer(&mut Cursor::new("yep\n")).unwrap());
        // Closed stdin declines.
        assert!(!read_answer(&mut Cursor::new("")).unwrap());
    }
}
