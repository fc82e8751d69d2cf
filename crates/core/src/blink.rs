// BootCast - Boot Broadcast Sequencer
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use crate::clock::ClockSample;
use crate::signals::IndicatorLevel;

/// Non-blocking toggle cadence for the status indicator.
///
/// `last_toggle` only moves when a toggle happens or the timer is rebased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkTimer {
    interval_ms: u32,
    last_toggle: ClockSample,
    level: IndicatorLevel,
}

impl BlinkTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_toggle: ClockSample::default(),
            level: IndicatorLevel::Unlit,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn last_toggle(&self) -> ClockSample {
        self.last_toggle
    }

    pub fn level(&self) -> IndicatorLevel {
        self.level
    }

    pub fn is_due(&self, now: ClockSample) -> bool {
        now.elapsed_since(self.last_toggle) >= self.interval_ms
    }

    /// Returns the new level if the interval has elapsed.
    pub fn poll(&mut self, now: ClockSample) -> Option<IndicatorLevel> {
        if !self.is_due(now) {
            return None;
        }
        self.level = self.level.toggled();
        self.last_toggle = now;
        Some(self.level)
    }

    /// Switch cadence and restart timing from `now`.
    pub fn rebase(&mut self, interval_ms: u32, now: ClockSample) {
        self.interval_ms = interval_ms;
        self.last_toggle = now;
    }

    /// Overwrite the tracked level; timing is untouched.
    pub fn force(&mut self, level: IndicatorLevel) {
        self.level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_only_at_interval() {
        let mut t = BlinkTimer::new(200);
        assert_eq!(t.poll(ClockSample(199)), None);
        assert_eq!(t.poll(ClockSample(200)), Some(IndicatorLevel::Lit));
        assert_eq!(t.last_toggle(), ClockSample(200));
        // Same crossing must not toggle again.
        assert_eq!(t.poll(ClockSample(200)), None);
        assert_eq!(t.poll(ClockSample(399)), None);
        assert_eq!(t.poll(ClockSample(400)), Some(IndicatorLevel::Unlit));
    }

    #[test]
    fn test_late_poll_toggles_once() {
        let mut t = BlinkTimer::new(200);
        assert_eq!(t.poll(ClockSample(1_000)), Some(IndicatorLevel::Lit));
        assert_eq!(t.poll(ClockSample(1_001)), None);
        assert_eq!(t.last_toggle(), ClockSample(1_000));
    }

    #[test]
    fn test_rebase_and_force() {
        let mut t = BlinkTimer::new(200);
        t.force(IndicatorLevel::Lit);
        t.rebase(1_000, ClockSample(5_000));
        assert_eq!(t.level(), IndicatorLevel::Lit);
        assert_eq!(t.poll(ClockSample(5_999)), None);
        assert_eq!(t.poll(ClockSample(6_000)), Some(IndicatorLevel::Unlit));
    }

    #[test]
    fn test_cadence_across_counter_wrap() {
        let mut t = BlinkTimer::new(1_000);
        t.rebase(1_000, ClockSample(u32::MAX - 499));
        assert_eq!(t.poll(ClockSample(499)), None);
        assert_eq!(t.poll(ClockSample(500)), Some(IndicatorLevel::Lit));
    }
}
