// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! # RCE Network
//!
//! Restricted Coulomb Energy classifier over labeled 2-D points:
//! - **Neurons**: hidden hyperspheres (center, radius, class) and output classes
//! - **Network**: one snapshot of training state, with the growth primitive
//! - **Trainer**: epoch loop with conflict-driven shrinkage, recording a trace
//! - **Playback**: step/epoch navigation over a finished trace
//!
//! ## Example
//!
//! ```rust
//! use rce_network::{RceTrainer, TrainingOutcome};
//! use rce_structures::Point;
//!
//! let mut trainer = RceTrainer::new(3.0);
//! let outcome = trainer
//!     .train(&[Point::new(0.0, 0.0, "A"), Point::new(5.0, 5.0, "B")])
//!     .unwrap();
//!
//! assert!(matches!(outcome, TrainingOutcome::Converged { hidden_neurons: 2, .. }));
//! assert!(trainer.training_done());
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod network;
pub mod neuron;
pub mod playback;
pub mod trace;
pub mod trainer;

pub use error::{RceError, RceResult};
pub use network::{Classification, RceNetwork};
pub use neuron::{HiddenNeuron, OutputNeuron};
pub use playback::{PlaybackProgress, TracePlayer};
pub use trace::Trace;
pub use trainer::{RceTrainer, TrainerConfig, TrainingOutcome, DEFAULT_R_MAX};
