//! # Fly Build Version
//!
//! File: cli/src/core/version.rs
//!
//! Version metadata embedded at compile time. Release builds set `FLY_VERSION`,
//! `FLY_COMMIT` and `FLY_BUILD_DATE`; local builds fall back to the crate
//! version prefixed with `v` so it orders against release tags the same way.

/// Version string compared against release tags by `fly update`.
pub const VERSION: &str = match option_env!("FLY_VERSION") {
    Some(v) => v,
    None => concat!("v", env!("CARGO_PKG_VERSION")),
};

/// Git commit the binary was built from.
pub const COMMIT_HASH: &str = match option_env!("FLY_COMMIT") {
    Some(c) => c,
    None => "unknown",
};

/// Date the binary was built.
pub const BUILD_DATE: &str = match option_env!("FLY_BUILD_DATE") {
    Some(d) => d,
    None => "unknown",
};
