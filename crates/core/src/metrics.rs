// BootCast - Boot Broadcast Sequencer
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use crate::clock::ClockSample;
use serde::{Deserialize, Serialize};

/// Counters kept by a single sequencer instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencerMetrics {
    pub polls: u64,
    pub join_requests: u64,
    pub indicator_toggles: u64,
    pub broadcasts_sent: u64,
    pub broadcast_failures: u64,
    pub broadcasting_entered_at: Option<ClockSample>,
    pub steady_blink_entered_at: Option<ClockSample>,
}

impl SequencerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_poll(&mut self) {
        self.polls += 1;
    }

    pub(crate) fn record_join_request(&mut self) {
        self.join_requests += 1;
    }

    pub(crate) fn record_toggle(&mut self) {
        self.indicator_toggles += 1;
    }

    pub(crate) fn record_broadcast(&mut self, ok: bool) {
        if ok {
            self.broadcasts_sent += 1;
        } else {
            self.broadcast_failures += 1;
        }
    }

    /// Broadcast attempts regardless of outcome.
    pub fn broadcast_attempts(&self) -> u64 {
        self.broadcasts_sent + self.broadcast_failures
    }

    /// Milliseconds from start until the join was observed.
    pub fn acquisition_ms(&self) -> Option<u32> {
        self.broadcasting_entered_at.map(ClockSample::as_millis)
    }
}
