//! # Fly Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Thin wrappers around `tokio::process::Command` for running external tools
//! with their output streamed straight to the user's terminal. Every call is
//! awaited to completion before returning; there is no timeout and no retry.
//!
//! ## Architecture
//!
//! - **`resolve_program`**: Looks the program up on `PATH` (via `which`) so a
//!   missing tool is reported as `FlyError::ToolNotFound` rather than a bare
//!   spawn error.
//! - **`run_streamed`**: Spawns the program with inherited stdin/stdout/stderr
//!   and maps a non-zero exit into `FlyError::ExternalCommand`.
//! - **`describe_command`**: Renders a program and its arguments for logs and
//!   error messages.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::process;
//!
//! # async fn run_example() -> anyhow::Result<()> {
//! let args = vec!["compose".to_string(), "ps".to_string()];
//! process::run_streamed("docker", &args).await?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{FlyError, Result};
use anyhow::{anyhow, Context};
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Resolves `program` against `PATH`. Paths containing a separator are
/// checked as-is.
pub fn resolve_program(program: &str) -> Result<PathBuf> {
    which::which(program).map_err(|e| {
        debug!("Lookup of '{}' failed: {}", program, e);
        anyhow!(FlyError::ToolNotFound {
            tool: program.to_string(),
        })
    })
}

/// Runs `program` with `args`, streaming its output live, and waits for it to exit.
///
/// # Errors
///
/// - `FlyError::ToolNotFound` if the program is not on `PATH`.
/// - A spawn error (with context) if the process cannot be started.
/// - `FlyError::ExternalCommand` if the process exits unsuccessfully.
pub async fn run_streamed(program: &str, args: &[String]) -> Result<()> {
    let resolved = resolve_program(program)?;
    let command_line = describe_command(program, args);
    info!("Running: {}", command_line);

    let mut command = Command::new(&resolved);
    command
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let status = command
        .status()
        .await
        .with_context(|| format!("Failed to spawn '{}'", resolved.display()))?;

    if status.success() {
        debug!("'{}' exited successfully", command_line);
        Ok(())
    } else {
        warn!("'{}' exited with {}", command_line, describe_status(status));
        Err(anyhow!(FlyError::ExternalCommand {
            cmd: command_line,
            status: describe_status(status),
        }))
    }
}

/// Joins a program and its arguments into a single display string.
pub fn describe_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}
