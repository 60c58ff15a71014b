//! # Fly Docker Daemon Utilities (`common::docker`)
//!
//! File: cli/src/common/docker/mod.rs
//!
//! ## Overview
//!
//! Direct Docker Engine API access via `bollard`. Fly drives containers
//! through the compose CLI (`common::compose`); this module only checks the
//! daemon for `fly status`.
//!

/// Handles establishing a connection to the local Docker daemon.
pub mod connect;

pub use connect::server_version;
