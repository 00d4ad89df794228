// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Collects every problem before failing, so a broken configuration file is
//! reported in one go.

use crate::{ConfigError, ConfigResult, RceConfig};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every failed check
pub fn validate_config(config: &RceConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_network(config, &mut errors);
    validate_logging(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_network(config: &RceConfig, errors: &mut Vec<ConfigValidationError>) {
    let r_max = config.network.r_max;
    if !r_max.is_finite() || r_max <= 0.0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "network.r_max".to_string(),
            reason: format!("must be a finite number > 0, got {}", r_max),
        });
    }
}

fn validate_logging(config: &RceConfig, errors: &mut Vec<ConfigValidationError>) {
    let level = config.logging.level.to_lowercase();
    if level.is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "logging.level".to_string(),
        });
    } else if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!("must be one of {}", LOG_LEVELS.join(", ")),
        });
    }

    if config.logging.file_logging {
        if config.logging.log_dir.as_os_str().is_empty() {
            errors.push(ConfigValidationError::MissingRequired {
                field: "logging.log_dir".to_string(),
            });
        }
        if config.logging.retention_runs == 0 {
            errors.push(ConfigValidationError::InvalidValue {
                field: "logging.retention_runs".to_string(),
                reason: "must keep at least one run when file logging is enabled".to_string(),
            });
        }
    }
}
