//! # Fly CLI Update Integration Tests
//!
//! File: cli/tests/update.rs
//!
//! ## Overview
//!
//! `fly update` must run as root and reaches the network, so these tests only
//! cover what is deterministic: the refusal for regular users, and the
//! failure against an unreachable release feed when the suite runs as root.
//! The installed binary is never replaced by these tests.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_update_requires_root() {
    if running_as_root() {
        return;
    }
    Fixture::new()
        .cmd()
        .args(["update", "--yes"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("sudo fly update"))
        .stderr(predicate::str::contains("the update command must be run as root"));
}

#[test]
fn test_update_reports_unreachable_feed() {
    if !running_as_root() {
        return;
    }
    Fixture::new()
        .cmd()
        .args(["update", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error checking for updates"));
}

#[test]
fn test_update_help_lists_yes_flag() {
    fly_cmd()
        .args(["update", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));
}
