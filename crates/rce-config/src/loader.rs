// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{ConfigError, ConfigResult, RceConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "rce_configuration.toml";

/// Environment variable pointing at a configuration file
pub const CONFIG_PATH_ENV: &str = "RCE_CONFIG_PATH";

/// How many directories above the starting point are searched
const MAX_PARENT_LEVELS: usize = 5;

/// Find the RCE configuration file
///
/// `RCE_CONFIG_PATH` wins if set, and must then name an existing file.
/// Otherwise the working directory and up to five of its parents are
/// searched for `rce_configuration.toml`, nearest first.
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Some(path) = env_config_path() {
        if path.is_file() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "{} points at {}, which does not exist",
            CONFIG_PATH_ENV,
            path.display()
        )));
    }

    let cwd = env::current_dir()?;
    find_config_file_from(&cwd)
}

/// Search `start` and its parents for `rce_configuration.toml`
///
/// Used for the working directory, and by tools that want to pick up a
/// configuration stored next to a dataset.
pub fn find_config_file_from(start: &Path) -> ConfigResult<PathBuf> {
    let candidates = candidate_paths(start);
    candidates
        .iter()
        .find(|path| path.is_file())
        .cloned()
        .ok_or_else(|| {
            ConfigError::FileNotFound(format!(
                "No {} in {} or its {} parent directories (set {} to point at one)",
                CONFIG_FILE_NAME,
                start.display(),
                candidates.len().saturating_sub(1),
                CONFIG_PATH_ENV
            ))
        })
}

fn candidate_paths(start: &Path) -> Vec<PathBuf> {
    start
        .ancestors()
        .take(MAX_PARENT_LEVELS + 1)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .collect()
}

fn env_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_ENV).map(PathBuf::from)
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if config file is not found or contains invalid TOML
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<RceConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: RceConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

/// Like [`load_config`], but a configuration file that cannot be found by
/// searching is not an error: built-in defaults are used instead.
///
/// An explicit `config_path`, or one named by `RCE_CONFIG_PATH`, must exist.
pub fn load_config_or_default(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<RceConfig> {
    let searched = config_path.is_none() && env_config_path().is_none();
    match load_config(config_path, cli_args) {
        Err(ConfigError::FileNotFound(_)) if searched => {
            let mut config = RceConfig::default();
            apply_environment_overrides(&mut config);
            if let Some(cli) = cli_args {
                apply_cli_overrides(&mut config, cli);
            }
            Ok(config)
        }
        other => other,
    }
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `RCE_R_MAX` -> `network.r_max`
/// - `RCE_MAX_EPOCHS` -> `training.max_epochs`
/// - `RCE_LOG_LEVEL` -> `logging.level`
/// - `RCE_LOG_DIR` -> `logging.log_dir`
/// - `RCE_FILE_LOGGING` -> `logging.file_logging`
pub fn apply_environment_overrides(config: &mut RceConfig) {
    if let Ok(value) = env::var("RCE_R_MAX") {
        if let Ok(r_max) = value.parse::<f64>() {
            config.network.r_max = r_max;
        }
    }
    if let Ok(value) = env::var("RCE_MAX_EPOCHS") {
        if let Ok(limit) = value.parse::<u32>() {
            config.training.max_epochs = limit;
        }
    }
    if let Ok(value) = env::var("RCE_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Ok(value) = env::var("RCE_LOG_DIR") {
        config.logging.log_dir = PathBuf::from(value);
    }
    if let Ok(value) = env::var("RCE_FILE_LOGGING") {
        config.logging.file_logging = parse_flag(&value);
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - HashMap of CLI arguments (e.g., `{"r_max": "2.5", "max_epochs": "100"}`)
pub fn apply_cli_overrides(config: &mut RceConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("r_max") {
        if let Ok(r_max) = value.parse::<f64>() {
            config.network.r_max = r_max;
        }
    }
    if let Some(value) = cli_args.get("max_epochs") {
        if let Ok(limit) = value.parse::<u32>() {
            config.training.max_epochs = limit;
        }
    }
    if let Some(value) = cli_args.get("print_trace") {
        config.training.print_trace = parse_flag(value);
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.to_lowercase();
    value == "true" || value == "1" || value == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::tempdir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_find_config_file_env_var() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("custom_config.toml");
        File::create(&config_path).unwrap();

        env::set_var(CONFIG_PATH_ENV, config_path.to_str().unwrap());
        let result = find_config_file();
        env::remove_var(CONFIG_PATH_ENV);

        assert_eq!(result.unwrap(), config_path);
    }

    #[test]
    fn test_find_config_file_env_var_missing() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();

        env::set_var(CONFIG_PATH_ENV, dir.path().join("missing.toml"));
        let result = find_config_file();
        env::remove_var(CONFIG_PATH_ENV);

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_search_walks_up_from_start() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("datasets").join("run1");
        fs::create_dir_all(&nested).unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        assert_eq!(find_config_file_from(&nested).unwrap(), config_path);

        // Nearest file wins
        let closer = nested.join(CONFIG_FILE_NAME);
        File::create(&closer).unwrap();
        assert_eq!(find_config_file_from(&nested).unwrap(), closer);
    }

    #[test]
    fn test_search_depth_is_bounded() {
        let dir = tempdir().unwrap();
        let mut deep = dir.path().to_path_buf();
        for level in 0..=MAX_PARENT_LEVELS {
            deep = deep.join(format!("level{}", level));
        }
        fs::create_dir_all(&deep).unwrap();
        File::create(dir.path().join(CONFIG_FILE_NAME)).unwrap();

        let candidates = candidate_paths(&deep);
        assert_eq!(candidates.len(), MAX_PARENT_LEVELS + 1);
        assert_eq!(candidates[0], deep.join(CONFIG_FILE_NAME));
        assert!(matches!(
            find_config_file_from(&deep),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_missing_env_config_is_not_replaced_by_defaults() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();

        env::set_var(CONFIG_PATH_ENV, dir.path().join("missing.toml"));
        let result = load_config_or_default(None, None);
        env::remove_var(CONFIG_PATH_ENV);

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_minimal_config() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        env::remove_var("RCE_R_MAX");
        env::remove_var("RCE_MAX_EPOCHS");
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[network]").unwrap();
        writeln!(file, "r_max = 1.25").unwrap();
        writeln!(file, "[training]").unwrap();
        writeln!(file, "max_epochs = 50").unwrap();

        let config = load_config(Some(&config_path), None).unwrap();

        assert_eq!(config.network.r_max, 1.25);
        assert_eq!(config.training.epoch_limit(), Some(50));
        // untouched sections keep their defaults
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_toml() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[network\nr_max = ").unwrap();

        let result = load_config(Some(&config_path), None);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let result = load_config_or_default(Some(&missing), None);
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_environment_overrides() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let mut config = RceConfig::default();

        env::set_var("RCE_R_MAX", "4.5");
        env::set_var("RCE_MAX_EPOCHS", "12");
        env::set_var("RCE_FILE_LOGGING", "yes");

        apply_environment_overrides(&mut config);

        env::remove_var("RCE_R_MAX");
        env::remove_var("RCE_MAX_EPOCHS");
        env::remove_var("RCE_FILE_LOGGING");

        assert_eq!(config.network.r_max, 4.5);
        assert_eq!(config.training.max_epochs, 12);
        assert!(config.logging.file_logging);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = RceConfig::default();
        let mut cli_args = HashMap::new();
        cli_args.insert("r_max".to_string(), "0.75".to_string());
        cli_args.insert("print_trace".to_string(), "true".to_string());
        cli_args.insert("max_epochs".to_string(), "not-a-number".to_string());

        apply_cli_overrides(&mut config, &cli_args);

        assert_eq!(config.network.r_max, 0.75);
        assert!(config.training.print_trace);
        assert_eq!(config.training.max_epochs, 0);
    }

    #[test]
    fn test_override_precedence() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        // CLI overrides take precedence over environment variables
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[network]").unwrap();
        writeln!(file, "r_max = 1.0").unwrap();
        writeln!(file, "[training]").unwrap();
        writeln!(file, "max_epochs = 10").unwrap();

        env::set_var("RCE_R_MAX", "2.0");
        env::set_var("RCE_MAX_EPOCHS", "20");

        let mut cli_args = HashMap::new();
        cli_args.insert("r_max".to_string(), "3.5".to_string());

        let config = load_config(Some(&config_path), Some(&cli_args)).unwrap();

        env::remove_var("RCE_R_MAX");
        env::remove_var("RCE_MAX_EPOCHS");

        // CLI wins for r_max, env wins for max_epochs (no CLI override)
        assert_eq!(config.network.r_max, 3.5);
        assert_eq!(config.training.max_epochs, 20);
    }
}
