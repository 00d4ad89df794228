// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! # RCE Structures
//!
//! Leaf data types shared by the trainer and the dataset I/O layer:
//! - [`Point`]: a labeled 2-D coordinate, identified by its exact `"x,y"` key
//! - [`InputData`]: an insertion-ordered, duplicate-rejecting dataset
//! - dataset JSON load/save (`{x, y, class_name}` records)

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod dataset_io;
pub mod error;
pub mod input_data;
pub mod point;

pub use dataset_io::{
    load_dataset_from_file, load_dataset_from_json, save_dataset_to_file, save_dataset_to_json,
};
pub use error::{StructuresError, StructuresResult};
pub use input_data::InputData;
pub use point::{Point, PointKey};
