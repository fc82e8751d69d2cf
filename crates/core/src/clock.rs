// BootCast - Boot Broadcast Sequencer
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

/// Millisecond counter since start, as the host's monotonic timer reports it.
///
/// The counter is 32 bits wide and wraps after ~49.7 days; intervals are
/// computed with modular subtraction so they stay valid across the wrap.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ClockSample(pub u32);

impl ClockSample {
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`.
    pub const fn elapsed_since(self, earlier: ClockSample) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    pub const fn wrapping_add_ms(self, ms: u32) -> Self {
        Self(self.0.wrapping_add(ms))
    }
}

impl From<u32> for ClockSample {
    fn from(ms: u32) -> Self {
        Self(ms)
    }
}

/// Source of monotonic time supplied by the host environment.
pub trait Clock {
    fn now(&self) -> ClockSample;
}

/// Bounded blocking pause.
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}

impl<D: Delay + ?Sized> Delay for &mut D {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}
