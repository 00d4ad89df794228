// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! Error types for RCE training and replay

use thiserror::Error;

/// Result type for RCE operations
pub type RceResult<T> = Result<T, RceError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RceError {
    /// `r_max` must be finite and strictly positive
    #[error("Invalid maximum radius: {0} (must be finite and > 0)")]
    InvalidRadius(f64),

    /// Training was still modifying the network when the epoch cap was reached
    #[error("Training did not converge within {limit} epochs")]
    EpochLimitExceeded { limit: u32 },

    #[error("Training has not finished - train the network before replaying it")]
    TrainingNotFinished,

    #[error("Snapshot index {index} out of range (trace has {len} snapshots)")]
    SnapshotOutOfRange { index: usize, len: usize },
}
