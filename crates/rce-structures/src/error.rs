// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Error handling for points and datasets.
*/

use thiserror::Error;

/// Result type for dataset operations
pub type StructuresResult<T> = Result<T, StructuresError>;

/// Error types for point and dataset operations
///
/// # Examples
/// ```
/// use rce_structures::{InputData, Point, StructuresError};
///
/// let mut data = InputData::new();
/// data.add_point(Point::new(1.0, 2.0, "red")).unwrap();
/// let err = data.add_point(Point::new(1.0, 2.0, "blue")).unwrap_err();
/// assert!(matches!(err, StructuresError::AlreadyExists(_)));
/// ```
#[derive(Error, Debug)]
pub enum StructuresError {
    /// A point with the same `"x,y"` key is already in the dataset
    #[error("Point already exists: {0}")]
    AlreadyExists(String),

    #[error("Point does not exist: {0}")]
    NotFound(String),

    /// Non-finite coordinate or empty class name
    #[error("Invalid point: {0}")]
    InvalidPoint(String),

    #[error("Invalid dataset record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("JSON parsing error: {0}")]
    Json(String),

    #[error("I/O error: {0}")]
    Io(String),
}

// Convert from serde_json::Error
impl From<serde_json::Error> for StructuresError {
    fn from(err: serde_json::Error) -> Self {
        StructuresError::Json(err.to_string())
    }
}

// Convert from std::io::Error
impl From<std::io::Error> for StructuresError {
    fn from(err: std::io::Error) -> Self {
        StructuresError::Io(err.to_string())
    }
}
