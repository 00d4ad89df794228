// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! Training session: configuration + dataset + trainer wired together
//!
//! This is the layer a visualizer or CLI talks to. It owns the dataset and the
//! trainer and hands out the trace for replay.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rce_config::RceConfig;
use rce_network::{RceResult, RceTrainer, TrainerConfig, TrainingOutcome};
use rce_structures::{load_dataset_from_file, InputData};
use tracing::info;

pub struct TrainingSession {
    data: InputData,
    trainer: RceTrainer,
}

impl TrainingSession {
    /// Trainer settings derived from the loaded configuration
    pub fn trainer_config(config: &RceConfig) -> TrainerConfig {
        TrainerConfig {
            r_max: config.network.r_max,
            max_epochs: config.training.epoch_limit(),
        }
    }

    pub fn new(config: &RceConfig, data: InputData) -> Self {
        Self {
            data,
            trainer: RceTrainer::with_config(Self::trainer_config(config)),
        }
    }

    pub fn from_dataset_file<P: AsRef<Path>>(config: &RceConfig, path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = load_dataset_from_file(path)
            .with_context(|| format!("Failed to load dataset {}", path.display()))?;
        Ok(Self::new(config, data))
    }

    pub fn data(&self) -> &InputData {
        &self.data
    }

    pub fn trainer(&self) -> &RceTrainer {
        &self.trainer
    }

    /// Train on the dataset in its insertion order
    pub fn train(&mut self) -> RceResult<TrainingOutcome> {
        self.trainer.train(self.data.points())
    }

    /// Write the recorded trace as a JSON array of snapshots
    pub fn write_trace_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self.trainer.trace())
            .context("Failed to serialize trace")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write trace to {}", path.display()))?;
        info!(
            "💾 [SESSION] Wrote {} snapshots to {}",
            self.trainer.trace().len(),
            path.display()
        );
        Ok(())
    }
}
