// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `rce_configuration.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RceConfig {
    pub network: NetworkConfig,
    pub training: TrainingConfig,
    pub logging: LoggingConfig,
}

/// Network shape parameters
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Radius given to every newly created hidden neuron
    pub r_max: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { r_max: 3.0 }
    }
}

/// Training loop parameters
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Epoch cap, 0 = unlimited
    pub max_epochs: u32,
    /// Print every recorded snapshot after training
    pub print_trace: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_epochs: 0,
            print_trace: false,
        }
    }
}

impl TrainingConfig {
    pub fn epoch_limit(&self) -> Option<u32> {
        match self.max_epochs {
            0 => None,
            limit => Some(limit),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    pub level: String,
    pub log_dir: PathBuf,
    /// Also write JSON logs to a timestamped run folder under `log_dir`
    pub file_logging: bool,
    /// Number of run folders to keep
    pub retention_runs: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: PathBuf::from("./logs"),
            file_logging: false,
            retention_runs: 10,
        }
    }
}
