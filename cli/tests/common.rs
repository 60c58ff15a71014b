//! # Fly CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test builds
//! a `Fixture`: a temporary home directory plus a config file (passed through
//! `FLY_CONFIG`) whose compose command is a small shell script. The script
//! appends `<manifest>|<compose args>` to a log instead of talking to Docker,
//! and exits with `$FLY_TEST_EXIT` (default 0).
//!
//! Every command except `update` refuses to run as root. Tests that expect
//! real behaviour go through `as_regular_user`, which asserts the refusal
//! under root and prints a note naming the checks that were skipped.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::{assert::Assert, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Message printed when a non-update command runs as root.
pub const ROOT_REFUSAL: &str = "you should not run this command as root";

/// An `assert_cmd::Command` for the compiled `fly` binary.
pub fn fly_cmd() -> Command {
    Command::cargo_bin("fly").expect("Failed to find fly binary for testing")
}

/// Whether the test process runs with an effective UID of 0.
pub fn running_as_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}

/// Returns the assertion for a regular user, or `None` under root.
///
/// Under root the command must be refused before doing anything; that is
/// asserted here, and the skipped behavioural checks are reported on stderr
/// so a root test run does not pass silently.
pub fn as_regular_user(assert: Assert, test: &str) -> Option<Assert> {
    if !running_as_root() {
        return Some(assert);
    }
    assert
        .failure()
        .stderr(predicates::str::contains(ROOT_REFUSAL));
    eprintln!("note: {} checked only the root refusal (running as root)", test);
    None
}

/// Temporary home, config and compose recorder for one test.
pub struct Fixture {
    _dir: TempDir,
    /// Canonical path of the temp dir, matching what `fly` resolves.
    root: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = fs::canonicalize(dir.path()).expect("Failed to resolve temp dir");
        let fixture = Fixture { _dir: dir, root };
        fs::create_dir(fixture.home()).expect("Failed to create home");
        fs::write(
            fixture.recorder(),
            format!(
                "manifest=\"$2\"\nshift 2\necho \"$manifest|$*\" >> '{}'\nexit ${{FLY_TEST_EXIT:-0}}\n",
                fixture.log().display()
            ),
        )
        .expect("Failed to write recorder script");
        fixture.write_config("");
        fixture
    }

    pub fn home(&self) -> PathBuf {
        self.root.join("home")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    fn recorder(&self) -> PathBuf {
        self.root.join("compose.sh")
    }

    fn log(&self) -> PathBuf {
        self.root.join("calls.log")
    }

    /// Writes the config file; `extra_paths` is appended to the `[paths]` table.
    pub fn write_config(&self, extra_paths: &str) {
        let config = format!(
            "[paths]\nhome = '{}'\n{}\n\n[compose]\ncommand = ['sh', '{}']\n\n[update]\nrelease_url = 'http://127.0.0.1:9/latest'\n",
            self.home().display(),
            extra_paths,
            self.recorder().display()
        );
        fs::write(self.config_path(), config).expect("Failed to write config");
    }

    /// Creates `<home>/<rel>/docker-compose.yml` and returns the manifest path.
    pub fn add_site(&self, rel: &str) -> PathBuf {
        add_manifest(&self.home().join(rel))
    }

    /// Creates the base services manifest under `<home>/.fly`.
    pub fn add_base(&self) -> PathBuf {
        add_manifest(&self.home().join(".fly"))
    }

    /// Recorded compose invocations as `<manifest>|<args>` lines.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// `fly` configured for this fixture, running from the home directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = fly_cmd();
        cmd.env("FLY_CONFIG", self.config_path())
            .env_remove("RUST_LOG")
            .env_remove("FLY_TEST_EXIT")
            .current_dir(self.home());
        cmd
    }
}

fn add_manifest(dir: &Path) -> PathBuf {
    fs::create_dir_all(dir).expect("Failed to create site dir");
    let manifest = dir.join("docker-compose.yml");
    fs::write(&manifest, "services: {}\n").expect("Failed to write manifest");
    manifest
}
