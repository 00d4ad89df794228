// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! Append-only history of network snapshots produced by one training run

use serde::{Deserialize, Serialize};

use crate::network::RceNetwork;

/// Ordered snapshots; index 0 is the freshly reset network, the last one is
/// the converged network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    snapshots: Vec<RceNetwork>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, snapshot: RceNetwork) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RceNetwork> {
        self.snapshots.get(index)
    }

    pub fn first(&self) -> Option<&RceNetwork> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&RceNetwork> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RceNetwork> {
        self.snapshots.iter()
    }

    pub fn as_slice(&self) -> &[RceNetwork] {
        &self.snapshots
    }

    /// Indices of snapshots that open an epoch (see [`RceNetwork::is_epoch_start`])
    pub fn epoch_starts(&self) -> Vec<usize> {
        self.snapshots
            .iter()
            .enumerate()
            .filter(|(_, snapshot)| snapshot.is_epoch_start())
            .map(|(index, _)| index)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a RceNetwork;
    type IntoIter = std::slice::Iter<'a, RceNetwork>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

impl std::ops::Index<usize> for Trace {
    type Output = RceNetwork;

    fn index(&self, index: usize) -> &Self::Output {
        &self.snapshots[index]
    }
}
