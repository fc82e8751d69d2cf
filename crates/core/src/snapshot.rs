// BootCast - Boot Broadcast Sequencer
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use crate::clock::ClockSample;
use crate::metrics::SequencerMetrics;
use crate::sequencer::SequencerState;
use crate::signals::IndicatorLevel;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SequencerSnapshot {
    pub state: SequencerState,
    pub indicator: IndicatorLevel,
    pub join_requested: bool,
    pub last_toggle: ClockSample,
    pub blink_interval_ms: u32,
    pub metrics: SequencerMetrics,
}

impl SequencerSnapshot {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
