// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! # RCE Network State
//!
//! One consistent instant of training: both layers, the loop cursors of the
//! trainer, its flags and a human-readable narration of the last step.
//!
//! ## Layers
//!
//! ```text
//! hidden layer (creation order)        output layer (first-seen class order)
//!   [0] center, radius, output ──┐       [0] "red"
//!   [1] center, radius, output ──┼────►  [1] "blue"
//!   [2] center, radius, output ──┘
//! ```
//!
//! `Clone` is a full structural copy; the trainer relies on this to capture
//! snapshots that are unaffected by later training steps.

use core::fmt;

use rce_structures::Point;
use serde::{Deserialize, Serialize};

use crate::neuron::{HiddenNeuron, OutputNeuron};

/// Result of classifying a coordinate against a network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Every covering hidden neuron votes for this class
    Class(String),
    /// Covering hidden neurons disagree (labels in output-layer order)
    Ambiguous(Vec<String>),
    /// No hidden neuron covers the coordinate
    Unknown,
}

/// Training state snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RceNetwork {
    r_max: f64,
    hidden_layer: Vec<HiddenNeuron>,
    output_layer: Vec<OutputNeuron>,
    /// Epoch counter, 1-based
    iteration: u32,
    /// Cursor into the training points
    train_input_index: usize,
    /// Cursor into the hidden layer during the inner scan
    index_of_hidden_neuron: Option<usize>,
    hit: Option<bool>,
    modification: bool,
    comment: String,
    action: String,
}

impl RceNetwork {
    /// Create an empty network at epoch 1
    pub fn new(r_max: f64) -> Self {
        Self {
            r_max,
            hidden_layer: Vec::new(),
            output_layer: Vec::new(),
            iteration: 1,
            train_input_index: 0,
            index_of_hidden_neuron: None,
            hit: None,
            modification: false,
            comment: String::new(),
            action: String::new(),
        }
    }

    /// Append a hidden neuron at `point` with radius `r_max`, linking it to the
    /// output neuron of `point`'s class (created if the class is new).
    ///
    /// Returns the index of the new hidden neuron.
    pub fn add_new_neuron(&mut self, point: &Point) -> usize {
        let mut action = format!(
            "Adding new hidden neuron at ({},{}) r = {}",
            point.x(),
            point.y(),
            self.r_max
        );

        let output = match self.find_output_neuron(point.class_name()) {
            Some(existing) => {
                action.push_str(&format!(
                    "; Output neuron already existed for class {}",
                    point.class_name()
                ));
                existing
            }
            None => {
                let neuron = OutputNeuron::new(point.class_name());
                action.push_str(&format!("; Adding new output neuron {}", neuron));
                self.output_layer.push(neuron);
                self.output_layer.len() - 1
            }
        };

        self.hidden_layer
            .push(HiddenNeuron::new([point.x(), point.y()], self.r_max, output));
        self.modification = true;
        self.action = action;
        self.hidden_layer.len() - 1
    }

    /// Index of the output neuron for `class_name`, searched in layer order
    pub fn find_output_neuron(&self, class_name: &str) -> Option<usize> {
        self.output_layer
            .iter()
            .position(|neuron| neuron.class_name() == class_name)
    }

    /// Output neuron a hidden neuron votes for.
    ///
    /// `None` if either index is out of range, which only happens for
    /// snapshots deserialized from malformed input.
    pub fn output_of(&self, hidden_index: usize) -> Option<&OutputNeuron> {
        let neuron = self.hidden_layer.get(hidden_index)?;
        self.output_layer.get(neuron.output_index())
    }

    /// Class label of a hidden neuron
    pub fn class_of(&self, hidden_index: usize) -> Option<&str> {
        self.output_of(hidden_index).map(OutputNeuron::class_name)
    }

    /// Render a hidden neuron with its resolved class, e.g. `[[0, 0], r=3, output=[red]]`
    pub fn describe_hidden(&self, hidden_index: usize) -> String {
        let Some(neuron) = self.hidden_layer.get(hidden_index) else {
            return format!("[no hidden neuron {}]", hidden_index);
        };
        let [cx, cy] = neuron.center();
        let output = match self.output_of(hidden_index) {
            Some(output) => output.to_string(),
            None => format!("[missing output {}]", neuron.output_index()),
        };
        format!("[[{}, {}], r={}, output={}]", cx, cy, neuron.radius(), output)
    }

    /// Classify `(x, y)` by the hidden neurons covering it. Never mutates.
    pub fn classify(&self, x: f64, y: f64) -> Classification {
        let mut votes = vec![false; self.output_layer.len()];
        for neuron in self.hidden_layer.iter().filter(|n| n.covers(x, y)) {
            if let Some(vote) = votes.get_mut(neuron.output_index()) {
                *vote = true;
            }
        }

        let mut labels: Vec<String> = self
            .output_layer
            .iter()
            .zip(votes)
            .filter(|(_, voted)| *voted)
            .map(|(neuron, _)| neuron.class_name().to_string())
            .collect();

        match labels.len() {
            0 => Classification::Unknown,
            1 => Classification::Class(labels.remove(0)),
            _ => Classification::Ambiguous(labels),
        }
    }

    pub fn r_max(&self) -> f64 {
        self.r_max
    }

    pub fn hidden_layer(&self) -> &[HiddenNeuron] {
        &self.hidden_layer
    }

    pub fn output_layer(&self) -> &[OutputNeuron] {
        &self.output_layer
    }

    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    pub fn train_input_index(&self) -> usize {
        self.train_input_index
    }

    pub fn index_of_hidden_neuron(&self) -> Option<usize> {
        self.index_of_hidden_neuron
    }

    pub fn hit(&self) -> Option<bool> {
        self.hit
    }

    pub fn modification(&self) -> bool {
        self.modification
    }

    /// Narration of the last comparison or growth step
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Narration of the last structural action
    pub fn action(&self) -> &str {
        &self.action
    }

    /// First snapshot of each epoch: first point against the first hidden neuron
    pub fn is_epoch_start(&self) -> bool {
        self.train_input_index == 0 && self.index_of_hidden_neuron == Some(0)
    }

    // Trainer-side mutation

    pub(crate) fn hidden_neuron_mut(&mut self, hidden_index: usize) -> &mut HiddenNeuron {
        &mut self.hidden_layer[hidden_index]
    }

    pub(crate) fn set_iteration(&mut self, iteration: u32) {
        self.iteration = iteration;
    }

    pub(crate) fn set_train_input_index(&mut self, index: usize) {
        self.train_input_index = index;
    }

    pub(crate) fn set_index_of_hidden_neuron(&mut self, index: Option<usize>) {
        self.index_of_hidden_neuron = index;
    }

    pub(crate) fn set_hit(&mut self, hit: Option<bool>) {
        self.hit = hit;
    }

    pub(crate) fn set_modification(&mut self, modification: bool) {
        self.modification = modification;
    }

    pub(crate) fn set_comment(&mut self, comment: String) {
        self.comment = comment;
    }

    pub(crate) fn set_action(&mut self, action: String) {
        self.action = action;
    }

    pub(crate) fn clear_narration(&mut self) {
        self.comment.clear();
        self.action.clear();
    }
}

impl fmt::Display for RceNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "######################")?;
        writeln!(f, "RCE Network")?;
        writeln!(f, "iteration: {}", self.iteration)?;
        writeln!(f, "index of train vector: {}", self.train_input_index)?;
        match self.index_of_hidden_neuron {
            Some(index) => writeln!(f, "index of hidden neuron: {}", index)?,
            None => writeln!(f, "index of hidden neuron: none")?,
        }
        writeln!(f, "last action: {}", self.action)?;
        writeln!(f, "{}", self.comment)?;
        writeln!(f, "----------------------")?;
        writeln!(f, "neurons in hidden layer: {}", self.hidden_layer.len())?;
        writeln!(f, "neurons in output layer: {}", self.output_layer.len())?;
        writeln!(f, "change in network: {}", self.modification)?;
        match self.hit {
            Some(hit) => writeln!(f, "hit flag: {}", hit)?,
            None => writeln!(f, "hit flag: none")?,
        }
        write!(f, "hidden layer: ")?;
        for index in 0..self.hidden_layer.len() {
            write!(f, "{}, ", self.describe_hidden(index))?;
        }
        writeln!(f)?;
        write!(f, "output layer: ")?;
        for neuron in &self.output_layer {
            write!(f, "{}, ", neuron)?;
        }
        writeln!(f)?;
        writeln!(f, "######################")
    }
}
