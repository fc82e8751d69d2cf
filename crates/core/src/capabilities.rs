// BootCast - Boot Broadcast Sequencer
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use crate::signals::IndicatorLevel;
use crate::CapResult;
use std::net::Ipv4Addr;

/// All-ones broadcast destination.
pub const BROADCAST_ADDR: Ipv4Addr = Ipv4Addr::BROADCAST;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStatus {
    Joined,
    NotJoined,
}

/// Wireless association handled by the platform network stack.
///
/// Reconnection after a failed join is the stack's responsibility.
pub trait NetworkClient {
    /// Fire-and-forget join request.
    fn request_join(&mut self, network_name: &str, credential: &str);
    fn status(&self) -> NetworkStatus;
    /// Diagnostics only.
    fn local_address(&self) -> Option<Ipv4Addr>;
}

/// Best-effort UDP broadcast.
pub trait DatagramSender {
    /// Bind the local socket; called once when the network comes up.
    fn open(&mut self, port: u16) -> CapResult<()>;
    /// Send one datagram to the broadcast address on `port`.
    fn send_broadcast(&mut self, payload: &[u8], port: u16) -> CapResult<()>;
}

/// Binary status output. Implementations own the logical to physical mapping.
pub trait Indicator {
    fn set_level(&mut self, level: IndicatorLevel);
}

impl<N: NetworkClient + ?Sized> NetworkClient for &mut N {
    fn request_join(&mut self, network_name: &str, credential: &str) {
        (**self).request_join(network_name, credential)
    }

    fn status(&self) -> NetworkStatus {
        (**self).status()
    }

    fn local_address(&self) -> Option<Ipv4Addr> {
        (**self).local_address()
    }
}

impl<S: DatagramSender + ?Sized> DatagramSender for &mut S {
    fn open(&mut self, port: u16) -> CapResult<()> {
        (**self).open(port)
    }

    fn send_broadcast(&mut self, payload: &[u8], port: u16) -> CapResult<()> {
        (**self).send_broadcast(payload, port)
    }
}

impl<I: Indicator + ?Sized> Indicator for &mut I {
    fn set_level(&mut self, level: IndicatorLevel) {
        (**self).set_level(level)
    }
}
