// BootCast - Boot Broadcast Sequencer
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

pub mod blink;
pub mod capabilities;
pub mod clock;
pub mod metrics;
pub mod sequencer;
pub mod signals;
pub mod snapshot;


pub use bootcast_config::SequencerConfig;
pub use capabilities::{DatagramSender, Indicator, NetworkClient, NetworkStatus};
pub use clock::{Clock, ClockSample, Delay};
pub use sequencer::{Sequencer, SequencerState};
pub use signals::{DigitalLevel, IndicatorLevel, Polarity};

/// Failure reported by a host collaborator.
///
/// The sequencer never acts on these; they are logged and counted only.
#[derive(Debug, thiserror::Error)]
pub enum CapabilityError {
    #[error("Socket could not be opened on port {port}: {reason}")]
    SocketOpen { port: u16, reason: String },
    #[error("Datagram send failed: {0}")]
    Send(String),
    #[error("Socket not open")]
    NotOpen,
}

pub type CapResult<T> = Result<T, CapabilityError>;
