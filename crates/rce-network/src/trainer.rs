// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! # RCE Trainer
//!
//! Grows and shrinks hyperspheres until one full epoch passes without change.
//!
//! ## Algorithm
//!
//! ```text
//! modification = true
//! while modification:                          # epoch
//!     modification = false
//!     for point in points:                     # input order
//!         hit = false
//!         for neuron in hidden_layer:          # creation order, no early exit
//!             d = |point - neuron.center|
//!             if d <= neuron.radius:
//!                 if neuron.class == point.class: hit = true
//!                 else: neuron.radius = d / 2; modification = true
//!             snapshot
//!         if not hit:
//!             add_new_neuron(point); modification = true
//!             snapshot
//!     iteration += 1
//! ```
//!
//! Every comparison and every growth step appends a copy of the live network
//! to the trace, so the trace is a complete replay of the run.
//!
//! Two points with identical coordinates but different classes never
//! converge: each epoch shrinks both neurons to a radius of zero and both
//! points still sit on the boundary. Datasets reject duplicate keys, but keys
//! are textual, so `(0, 0)` and `(-0, 0)` both get in. Only
//! `TrainerConfig::max_epochs` bounds such a run.

use rce_structures::Point;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::error::{RceError, RceResult};
use crate::network::RceNetwork;
use crate::playback::TracePlayer;
use crate::trace::Trace;

/// Default maximum hypersphere radius
pub const DEFAULT_R_MAX: f64 = 3.0;

/// Trainer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Radius of every newly created hidden neuron
    pub r_max: f64,

    /// Abort after this many epochs if still modifying (None = unlimited).
    /// `Some(0)` means unlimited as well.
    pub max_epochs: Option<u32>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            r_max: DEFAULT_R_MAX,
            max_epochs: None,
        }
    }
}

impl TrainerConfig {
    pub fn validate(&self) -> RceResult<()> {
        if !self.r_max.is_finite() || self.r_max <= 0.0 {
            return Err(RceError::InvalidRadius(self.r_max));
        }
        Ok(())
    }
}

/// Summary of a `train` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingOutcome {
    /// Empty input: nothing was reset or recorded
    EmptyDataset,
    Converged {
        /// Epochs run, including the final unchanged one
        epochs: u32,
        snapshots: usize,
        hidden_neurons: usize,
        output_neurons: usize,
    },
}

/// Drives training of a single live network and records its trace
#[derive(Debug, Clone)]
pub struct RceTrainer {
    config: TrainerConfig,
    trace: Trace,
    training_done: bool,
}

impl Default for RceTrainer {
    fn default() -> Self {
        Self::with_config(TrainerConfig::default())
    }
}

impl RceTrainer {
    /// Create a trainer with the given maximum radius.
    ///
    /// An invalid radius (non-finite or <= 0) falls back to [`DEFAULT_R_MAX`].
    pub fn new(r_max: f64) -> Self {
        Self::with_config(TrainerConfig {
            r_max,
            ..TrainerConfig::default()
        })
    }

    /// Create a trainer from a full configuration.
    ///
    /// An invalid radius falls back to [`DEFAULT_R_MAX`] with a warning.
    /// An epoch cap of zero is treated as no cap.
    pub fn with_config(mut config: TrainerConfig) -> Self {
        if let Err(e) = config.validate() {
            warn!("⚠️  [RCE-TRAIN] {}; using default r_max = {}", e, DEFAULT_R_MAX);
            config.r_max = DEFAULT_R_MAX;
        }
        config.max_epochs = config.max_epochs.filter(|&limit| limit > 0);
        Self {
            config,
            trace: Trace::new(),
            training_done: false,
        }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn r_max(&self) -> f64 {
        self.config.r_max
    }

    /// Snapshots recorded by the last non-empty `train` call
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn training_done(&self) -> bool {
        self.training_done
    }

    /// Converged network (last snapshot), once training is done
    pub fn final_network(&self) -> Option<&RceNetwork> {
        if self.training_done {
            self.trace.last()
        } else {
            None
        }
    }

    /// Replay cursor over the trace
    ///
    /// # Errors
    ///
    /// `RceError::TrainingNotFinished` unless the last run converged.
    pub fn player(&self) -> RceResult<TracePlayer<'_>> {
        if !self.training_done {
            return Err(RceError::TrainingNotFinished);
        }
        Ok(TracePlayer::new(&self.trace))
    }

    /// Train on `points` in order, replacing any previous trace.
    ///
    /// Empty input is a reported no-op: the previous trace and `training_done`
    /// are left as they are.
    ///
    /// # Errors
    ///
    /// `RceError::EpochLimitExceeded` if `max_epochs` is set and the network is
    /// still changing after that many epochs. The partial trace is kept and
    /// `training_done` stays false.
    pub fn train(&mut self, points: &[Point]) -> RceResult<TrainingOutcome> {
        if points.is_empty() {
            warn!("⚠️  [RCE-TRAIN] Training dataset is empty - nothing to do");
            return Ok(TrainingOutcome::EmptyDataset);
        }

        info!(
            "🧠 [RCE-TRAIN] Training on {} points (r_max = {})",
            points.len(),
            self.config.r_max
        );

        // Full reset
        self.training_done = false;
        let mut trace = Trace::new();
        let mut network = RceNetwork::new(self.config.r_max);
        network.set_action("No action - new network was created".to_string());
        trace.push(network.clone());

        network.set_modification(true);
        while network.modification() {
            if let Some(limit) = self.config.max_epochs {
                if network.iteration() > limit {
                    warn!(
                        "⚠️  [RCE-TRAIN] Still modifying after {} epochs - giving up ({} snapshots kept)",
                        limit,
                        trace.len()
                    );
                    self.trace = trace;
                    return Err(RceError::EpochLimitExceeded { limit });
                }
            }

            network.set_modification(false);
            run_epoch(&mut network, points, &mut trace);

            debug!(
                "[RCE-TRAIN] Epoch {} finished: {} hidden / {} output neurons, modified = {}",
                network.iteration(),
                network.hidden_layer().len(),
                network.output_layer().len(),
                network.modification()
            );

            network.set_train_input_index(0);
            network.set_iteration(network.iteration() + 1);
        }

        let outcome = TrainingOutcome::Converged {
            epochs: network.iteration() - 1,
            snapshots: trace.len(),
            hidden_neurons: network.hidden_layer().len(),
            output_neurons: network.output_layer().len(),
        };

        self.trace = trace;
        self.training_done = true;

        info!("✅ [RCE-TRAIN] Training finished: {:?}", outcome);
        Ok(outcome)
    }
}

/// One pass over all training points
fn run_epoch(network: &mut RceNetwork, points: &[Point], trace: &mut Trace) {
    for (point_index, point) in points.iter().enumerate() {
        network.set_train_input_index(point_index);
        network.set_hit(Some(false));
        network.set_index_of_hidden_neuron(Some(0));
        network.clear_narration();

        // Neurons added for this point are not part of its own scan
        let existing = network.hidden_layer().len();
        for neuron_index in 0..existing {
            network.set_index_of_hidden_neuron(Some(neuron_index));
            compare(network, point, neuron_index);
            trace!(
                "[RCE-TRAIN] epoch {} point {} neuron {}: {}",
                network.iteration(),
                point_index,
                neuron_index,
                network.comment()
            );
            trace.push(network.clone());
        }
        network.set_index_of_hidden_neuron(Some(existing));

        if network.hit() != Some(true) {
            let first = existing == 0;
            network.add_new_neuron(point);
            network.set_modification(true);
            network.set_comment(if first {
                "First hidden neuron was added".to_string()
            } else {
                format!(
                    "No sufficient hidden neuron for training point {} - adding new hidden neuron",
                    point
                )
            });
            trace!("[RCE-TRAIN] {}", network.action());
            trace.push(network.clone());
        }
    }
}

/// Compare one point against one hidden neuron, shrinking it on a class conflict
fn compare(network: &mut RceNetwork, point: &Point, neuron_index: usize) {
    let neuron = &network.hidden_layer()[neuron_index];
    let [cx, cy] = neuron.center();
    let distance = point.distance_to(cx, cy);
    let radius = neuron.radius();
    let description = network.describe_hidden(neuron_index);

    if distance <= radius {
        if network.class_of(neuron_index) == Some(point.class_name()) {
            network.set_hit(Some(true));
            network.set_comment(format!(
                "Comparing training point {} to hidden neuron {} - hit, class matches",
                point, description
            ));
        } else {
            network.hidden_neuron_mut(neuron_index).shrink_to(distance / 2.0);
            network.set_modification(true);
            let updated = network.describe_hidden(neuron_index);
            network.set_comment(format!(
                "Comparing training point {} to hidden neuron {} - hit, class doesn't match - updating hidden neuron to {}",
                point, description, updated
            ));
        }
    } else {
        network.set_comment(format!(
            "Comparing training point {} to hidden neuron {} - no hit",
            point, description
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_b() -> Vec<Point> {
        vec![Point::new(0.0, 0.0, "A"), Point::new(1.0, 0.0, "B")]
    }

    #[test]
    fn test_invalid_radius_falls_back_to_default() {
        assert_eq!(RceTrainer::new(-1.0).r_max(), DEFAULT_R_MAX);
        assert_eq!(RceTrainer::new(f64::NAN).r_max(), DEFAULT_R_MAX);
        assert_eq!(RceTrainer::new(0.0).r_max(), DEFAULT_R_MAX);
        assert_eq!(RceTrainer::new(1.5).r_max(), 1.5);
    }

    #[test]
    fn test_config_validation() {
        let config = TrainerConfig {
            r_max: 0.0,
            max_epochs: None,
        };
        assert_eq!(config.validate(), Err(RceError::InvalidRadius(0.0)));
        assert!(TrainerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_epoch_cap_means_unlimited() {
        let mut trainer = RceTrainer::with_config(TrainerConfig {
            r_max: 3.0,
            max_epochs: Some(0),
        });
        assert_eq!(trainer.config().max_epochs, None);

        let outcome = trainer.train(&scenario_b()).unwrap();
        assert!(matches!(outcome, TrainingOutcome::Converged { epochs: 3, .. }));
        assert!(trainer.trace().len() >= 2);
    }

    #[test]
    fn test_reset_snapshot() {
        let mut trainer = RceTrainer::new(3.0);
        trainer.train(&scenario_b()).unwrap();

        let reset = &trainer.trace()[0];
        assert!(reset.hidden_layer().is_empty());
        assert!(reset.output_layer().is_empty());
        assert_eq!(reset.iteration(), 1);
        assert_eq!(reset.train_input_index(), 0);
        assert_eq!(reset.index_of_hidden_neuron(), None);
        assert_eq!(reset.hit(), None);
        assert!(!reset.modification());
        assert_eq!(reset.action(), "No action - new network was created");
    }

    #[test]
    fn test_first_neuron_snapshot() {
        let mut trainer = RceTrainer::new(3.0);
        trainer.train(&scenario_b()).unwrap();

        let first = &trainer.trace()[1];
        assert_eq!(first.hidden_layer().len(), 1);
        assert_eq!(first.comment(), "First hidden neuron was added");
        assert_eq!(first.index_of_hidden_neuron(), Some(0));
        assert_eq!(first.hit(), Some(false));
        assert!(first.modification());
        assert!(first.is_epoch_start());
    }

    #[test]
    fn test_shrink_narration() {
        let mut trainer = RceTrainer::new(3.0);
        trainer.train(&scenario_b()).unwrap();

        let shrink = &trainer.trace()[2];
        assert_eq!(shrink.train_input_index(), 1);
        assert_eq!(shrink.index_of_hidden_neuron(), Some(0));
        assert_eq!(shrink.hidden_layer()[0].radius(), 0.5);
        assert_eq!(
            shrink.comment(),
            "Comparing training point [1, 0, class = B] to hidden neuron [[0, 0], r=3, output=[A]] \
             - hit, class doesn't match - updating hidden neuron to [[0, 0], r=0.5, output=[A]]"
        );

        let grow = &trainer.trace()[3];
        assert_eq!(grow.index_of_hidden_neuron(), Some(1));
        assert_eq!(
            grow.comment(),
            "No sufficient hidden neuron for training point [1, 0, class = B] - adding new hidden neuron"
        );
        assert_eq!(
            grow.action(),
            "Adding new hidden neuron at (1,0) r = 3; Adding new output neuron [B]"
        );
    }

    #[test]
    fn test_empty_input_keeps_previous_trace() {
        let mut trainer = RceTrainer::new(3.0);
        trainer.train(&scenario_b()).unwrap();
        let before = trainer.trace().clone();

        let outcome = trainer.train(&[]).unwrap();
        assert_eq!(outcome, TrainingOutcome::EmptyDataset);
        assert_eq!(trainer.trace(), &before);
        assert!(trainer.training_done());
    }

    #[test]
    fn test_player_requires_training() {
        let trainer = RceTrainer::default();
        assert!(matches!(trainer.player(), Err(RceError::TrainingNotFinished)));
        assert!(trainer.final_network().is_none());
    }
}
