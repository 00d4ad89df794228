// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

/*!
RCE Training Tool

Trains an RCE network on a dataset file and prints the result.

Usage:
  cargo run --bin rce_train -- <dataset.json> [options]

Options:
  --config <path>        configuration file (default: rce_configuration.toml next to the
                         dataset, then in the working directory)
  --r-max <value>        maximum hidden neuron radius
  --max-epochs <n>       stop after n epochs if still changing (0 = unlimited)
  --print-trace          print every recorded snapshot
  --trace-out <path>     write the trace as JSON
  --classify <x,y>       classify a coordinate with the trained network (repeatable)
  --debug-<crate>        debug logging for one crate, or --debug-all

Example:
  cargo run --bin rce_train -- data/two_clusters.json --r-max 2 --print-trace
*/

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use rce::config::{
    find_config_file_from, load_config_or_default, validate_config, CONFIG_PATH_ENV,
};
use rce::network::TrainingOutcome;
use rce::observability::{init_logging, CrateDebugFlags, FileLoggingConfig, LoggingConfig};
use rce::TrainingSession;

struct Args {
    dataset: PathBuf,
    config: Option<PathBuf>,
    overrides: HashMap<String, String>,
    trace_out: Option<PathBuf>,
    classify: Vec<(f64, f64)>,
}

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: rce_train <dataset.json> [--config <path>] [--r-max <value>] [--max-epochs <n>]\n\
         \x20                [--print-trace] [--trace-out <path>] [--classify <x,y>] [--debug-<crate>]"
    );
    process::exit(2);
}

fn parse_args() -> Result<Args> {
    let mut dataset = None;
    let mut config = None;
    let mut overrides = HashMap::new();
    let mut trace_out = None;
    let mut classify = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config = Some(PathBuf::from(args.next().unwrap_or_else(|| usage_and_exit())));
            }
            "--r-max" => {
                let v = args.next().unwrap_or_else(|| usage_and_exit());
                overrides.insert("r_max".to_string(), v);
            }
            "--max-epochs" => {
                let v = args.next().unwrap_or_else(|| usage_and_exit());
                overrides.insert("max_epochs".to_string(), v);
            }
            "--print-trace" => {
                overrides.insert("print_trace".to_string(), "true".to_string());
            }
            "--trace-out" => {
                trace_out = Some(PathBuf::from(args.next().unwrap_or_else(|| usage_and_exit())));
            }
            "--classify" => {
                let v = args.next().unwrap_or_else(|| usage_and_exit());
                classify.push(parse_coordinate(&v)?);
            }
            "-h" | "--help" => usage_and_exit(),
            other if other.starts_with("--debug-") => {}
            other if other.starts_with("--") => {
                eprintln!("Unknown argument: {other}");
                usage_and_exit();
            }
            other => {
                if dataset.is_some() {
                    bail!("More than one dataset given: {}", other);
                }
                dataset = Some(PathBuf::from(other));
            }
        }
    }

    let Some(dataset) = dataset else {
        usage_and_exit();
    };

    Ok(Args {
        dataset,
        config,
        overrides,
        trace_out,
        classify,
    })
}

fn parse_coordinate(value: &str) -> Result<(f64, f64)> {
    let (x, y) = value
        .split_once(',')
        .with_context(|| format!("Expected <x,y>, got '{}'", value))?;
    let x = x.trim().parse::<f64>().with_context(|| format!("Invalid x in '{}'", value))?;
    let y = y.trim().parse::<f64>().with_context(|| format!("Invalid y in '{}'", value))?;
    Ok((x, y))
}

/// Configuration stored alongside the dataset, unless `RCE_CONFIG_PATH` says otherwise
fn dataset_config(dataset: &Path) -> Option<PathBuf> {
    if env::var_os(CONFIG_PATH_ENV).is_some() {
        return None;
    }
    let dir = dataset.parent().filter(|d| !d.as_os_str().is_empty())?;
    find_config_file_from(dir).ok()
}

fn main() -> Result<()> {
    let args = parse_args()?;

    let config_path = args.config.clone().or_else(|| dataset_config(&args.dataset));
    let config = load_config_or_default(config_path.as_deref(), Some(&args.overrides))
        .context("Failed to load configuration")?;
    validate_config(&config)?;

    let logging = LoggingConfig {
        level: config.logging.level.clone(),
        file: config.logging.file_logging.then(|| FileLoggingConfig {
            log_dir: config.logging.log_dir.clone(),
            retention_runs: config.logging.retention_runs,
        }),
    };
    let _logging_guard = init_logging(&CrateDebugFlags::from_args(env::args()), &logging)?;

    println!("🧠 RCE Network Trainer");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Dataset: {}", args.dataset.display());
    println!("   r_max:      {}", config.network.r_max);
    match config.training.epoch_limit() {
        Some(limit) => println!("   max epochs: {}", limit),
        None => println!("   max epochs: unlimited"),
    }
    println!();

    let mut session = TrainingSession::from_dataset_file(&config, &args.dataset)?;
    println!(
        "   {} points, classes: {}",
        session.data().len(),
        session.data().class_names().join(", ")
    );
    println!();

    println!("🔄 Training RCE Network...");
    let outcome = session.train();

    if config.training.print_trace {
        // Every step of training; the last one is the final network
        for snapshot in session.trainer().trace() {
            println!("{}", snapshot);
        }
    }

    if let Some(path) = &args.trace_out {
        session.write_trace_json(path)?;
        println!("💾 Trace written to: {}", path.display());
    }

    match outcome? {
        TrainingOutcome::EmptyDataset => {
            println!("⚠️  Dataset is empty - nothing was trained");
            return Ok(());
        }
        TrainingOutcome::Converged {
            epochs,
            snapshots,
            hidden_neurons,
            output_neurons,
        } => {
            println!("   ✅ Converged after {} epochs", epochs);
            println!("   {} snapshots recorded", snapshots);
            println!(
                "   {} hidden neurons, {} output neurons",
                hidden_neurons, output_neurons
            );
        }
    }
    println!();

    if let Some(network) = session.trainer().final_network() {
        println!("📋 Final network:");
        println!("{}", network);

        for (x, y) in &args.classify {
            println!("   ({}, {}) → {:?}", x, y, network.classify(*x, *y));
        }
    }

    Ok(())
}
