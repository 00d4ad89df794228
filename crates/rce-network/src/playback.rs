// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! Step and epoch navigation over a finished trace

use serde::{Deserialize, Serialize};

use crate::error::{RceError, RceResult};
use crate::network::RceNetwork;
use crate::trace::Trace;

/// Position summary for a replay view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackProgress {
    pub step: usize,
    pub total_steps: usize,
    pub iteration: u32,
    pub final_iteration: u32,
    pub train_input_index: usize,
}

/// Cursor over a non-empty trace. Every move is clamped to the trace bounds.
#[derive(Debug, Clone)]
pub struct TracePlayer<'a> {
    trace: &'a Trace,
    position: usize,
}

impl<'a> TracePlayer<'a> {
    pub(crate) fn new(trace: &'a Trace) -> Self {
        debug_assert!(!trace.is_empty(), "a finished trace is never empty");
        Self { trace, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> &'a RceNetwork {
        &self.trace[self.position]
    }

    fn last_index(&self) -> usize {
        self.trace.len().saturating_sub(1)
    }

    pub fn first(&mut self) -> &'a RceNetwork {
        self.position = 0;
        self.current()
    }

    pub fn last(&mut self) -> &'a RceNetwork {
        self.position = self.last_index();
        self.current()
    }

    pub fn next_step(&mut self) -> &'a RceNetwork {
        if self.position < self.last_index() {
            self.position += 1;
        }
        self.current()
    }

    pub fn prev_step(&mut self) -> &'a RceNetwork {
        self.position = self.position.saturating_sub(1);
        self.current()
    }

    /// Advance to the next epoch-start snapshot, or to the end
    pub fn next_epoch(&mut self) -> &'a RceNetwork {
        while self.position < self.last_index() {
            self.position += 1;
            if self.current().is_epoch_start() {
                break;
            }
        }
        self.current()
    }

    /// Move back to the previous epoch-start snapshot, or to the beginning
    pub fn prev_epoch(&mut self) -> &'a RceNetwork {
        while self.position > 0 {
            self.position -= 1;
            if self.current().is_epoch_start() {
                break;
            }
        }
        self.current()
    }

    pub fn seek(&mut self, index: usize) -> RceResult<&'a RceNetwork> {
        if index >= self.trace.len() {
            return Err(RceError::SnapshotOutOfRange {
                index,
                len: self.trace.len(),
            });
        }
        self.position = index;
        Ok(self.current())
    }

    pub fn progress(&self) -> PlaybackProgress {
        let current = self.current();
        PlaybackProgress {
            step: self.position,
            total_steps: self.trace.len(),
            iteration: current.iteration(),
            final_iteration: self.trace.last().map_or(0, |n| n.iteration()),
            train_input_index: current.train_input_index(),
        }
    }
}
