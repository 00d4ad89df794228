// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! # rce-observability
//!
//! Logging setup shared by the RCE tools, with per-crate debug flag support.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod init;

// Re-export commonly used items
pub use cli::*;
pub use config::*;
pub use init::*;

/// Known RCE crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "rce",
    "rce-config",
    "rce-network",
    "rce-structures",
    "rce-observability",
];
