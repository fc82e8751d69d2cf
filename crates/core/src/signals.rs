// BootCast - Boot Broadcast Sequencer
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

/// Represents a physical digital signal level on an output pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigitalLevel {
    #[default]
    Low,
    High,
}

impl From<bool> for DigitalLevel {
    fn from(b: bool) -> Self {
        if b {
            DigitalLevel::High
        } else {
            DigitalLevel::Low
        }
    }
}

impl From<DigitalLevel> for bool {
    fn from(level: DigitalLevel) -> Self {
        match level {
            DigitalLevel::High => true,
            DigitalLevel::Low => false,
        }
    }
}

/// Logical state of the status indicator, independent of wiring.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorLevel {
    #[default]
    Unlit,
    Lit,
}

impl IndicatorLevel {
    pub fn toggled(self) -> Self {
        match self {
            IndicatorLevel::Lit => IndicatorLevel::Unlit,
            IndicatorLevel::Unlit => IndicatorLevel::Lit,
        }
    }

    pub fn is_lit(self) -> bool {
        self == IndicatorLevel::Lit
    }
}

impl From<bool> for IndicatorLevel {
    fn from(lit: bool) -> Self {
        if lit {
            IndicatorLevel::Lit
        } else {
            IndicatorLevel::Unlit
        }
    }
}

/// Maps logical indicator levels onto the physical pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    ActiveHigh,
    #[default]
    ActiveLow,
}

impl Polarity {
    pub fn from_active_high(active_high: bool) -> Self {
        if active_high {
            Polarity::ActiveHigh
        } else {
            Polarity::ActiveLow
        }
    }

    pub fn to_physical(self, level: IndicatorLevel) -> DigitalLevel {
        match self {
            Polarity::ActiveHigh => DigitalLevel::from(level.is_lit()),
            Polarity::ActiveLow => DigitalLevel::from(!level.is_lit()),
        }
    }
}
