// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! # RCE - Restricted Coulomb Energy classifier
//!
//! Incremental classifier over labeled 2-D points: a growing set of labeled
//! hyperspheres ("hidden neurons") that partition the plane by class. Every
//! training step is recorded so a visualizer can replay the run.
//!
//! ## Crates
//! - **`structures`**: points, datasets, dataset JSON
//! - **`network`**: neurons, network snapshots, trainer, trace replay
//! - **`config`**: TOML configuration with env/CLI overrides
//! - **`observability`**: logging setup
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rce::prelude::*;
//!
//! let data = load_dataset_from_file("data/two_clusters.json")?;
//!
//! let mut trainer = RceTrainer::new(3.0);
//! trainer.train(data.points())?;
//!
//! let mut player = trainer.player()?;
//! player.next_epoch();
//! println!("{}", player.current());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use rce_config as config;
pub use rce_network as network;
pub use rce_observability as observability;
pub use rce_structures as structures;

pub mod session;

pub use session::TrainingSession;

/// Convenient re-exports of the types most callers need
pub mod prelude {
    pub use crate::session::TrainingSession;
    pub use rce_network::{
        Classification, HiddenNeuron, OutputNeuron, PlaybackProgress, RceError, RceNetwork,
        RceResult, RceTrainer, Trace, TracePlayer, TrainerConfig, TrainingOutcome,
    };
    pub use rce_structures::{
        load_dataset_from_file, load_dataset_from_json, save_dataset_to_file,
        save_dataset_to_json, InputData, Point, PointKey, StructuresError,
    };
}
