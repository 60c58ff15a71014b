//! # Fly Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: Configuration loading and the resolved filesystem layout
//! - `error`: The `FlyError` enum and the crate-wide `Result` alias
//! - `version`: Version metadata embedded at build time
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{FlyError, Result}; // For error handling
//! use crate::core::version::VERSION; // For update checks
//! ```
//!
pub mod config;
pub mod error;
pub mod version;
