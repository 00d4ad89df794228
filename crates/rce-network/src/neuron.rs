// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! Hidden (hypersphere) and output (class) neurons
//!
//! A hidden neuron refers to its output neuron by position in the owning
//! network's output layer, so copying a network copies the whole graph with
//! no shared state.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Class label entity a hidden neuron votes for.
///
/// Lookups are by label value; a network holds at most one per label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputNeuron {
    class_name: String,
}

impl OutputNeuron {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

impl fmt::Display for OutputNeuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.class_name)
    }
}

/// Labeled disk in the plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenNeuron {
    center: [f64; 2],
    radius: f64,
    /// Index into the owning network's output layer
    output: usize,
}

impl HiddenNeuron {
    pub(crate) fn new(center: [f64; 2], radius: f64, output: usize) -> Self {
        Self {
            center,
            radius,
            output,
        }
    }

    pub fn center(&self) -> [f64; 2] {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Position of this neuron's class in the output layer
    pub fn output_index(&self) -> usize {
        self.output
    }

    /// Euclidean distance from the center to `(x, y)`
    #[inline]
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        ((x - self.center[0]).powi(2) + (y - self.center[1]).powi(2)).sqrt()
    }

    #[inline]
    pub fn covers(&self, x: f64, y: f64) -> bool {
        self.distance_to(x, y) <= self.radius
    }

    /// Radius only ever shrinks
    pub(crate) fn shrink_to(&mut self, radius: f64) {
        debug_assert!(radius <= self.radius, "hidden neuron radius may only shrink");
        self.radius = radius;
    }
}
