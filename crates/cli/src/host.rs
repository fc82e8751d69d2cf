// BootCast - Boot Broadcast Sequencer
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Host-side stand-ins for the board capabilities.

use bootcast_core::capabilities::BROADCAST_ADDR;
use bootcast_core::{
    CapResult, CapabilityError, Clock, ClockSample, DatagramSender, Delay, Indicator,
    IndicatorLevel, NetworkClient, NetworkStatus, Polarity,
};
use std::io::ErrorKind;
use std::net::{Ipv4Addr, SocketAddrV4, UdpSocket};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Milliseconds since process start, folded into the wrapping 32-bit counter.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> ClockSample {
        // Truncation is the wrap.
        ClockSample(self.start.elapsed().as_millis() as u32)
    }
}

pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(ms as u64));
    }
}

/// Pretends to associate with a wireless network.
///
/// Reports `Joined` once `join_delay_ms` has passed since the join request;
/// with no delay configured the join never completes.
pub struct SimulatedNetwork {
    clock: MonotonicClock,
    join_delay_ms: Option<u32>,
    requested_at: Option<ClockSample>,
    address: Ipv4Addr,
}

impl SimulatedNetwork {
    pub fn new(clock: MonotonicClock, join_delay_ms: Option<u32>, address: Ipv4Addr) -> Self {
        Self {
            clock,
            join_delay_ms,
            requested_at: None,
            address,
        }
    }
}

impl NetworkClient for SimulatedNetwork {
    fn request_join(&mut self, network_name: &str, _credential: &str) {
        debug!(network = network_name, delay_ms = ?self.join_delay_ms, "Simulated join started");
        self.requested_at = Some(self.clock.now());
    }

    fn status(&self) -> NetworkStatus {
        match (self.requested_at, self.join_delay_ms) {
            (Some(at), Some(delay)) if self.clock.now().elapsed_since(at) >= delay => {
                NetworkStatus::Joined
            }
            _ => NetworkStatus::NotJoined,
        }
    }

    fn local_address(&self) -> Option<Ipv4Addr> {
        (self.status() == NetworkStatus::Joined).then_some(self.address)
    }
}

/// UDP broadcaster over a std socket.
pub struct UdpBroadcaster {
    bind: Ipv4Addr,
    socket: Option<UdpSocket>,
}

impl UdpBroadcaster {
    pub fn new(bind: Ipv4Addr) -> Self {
        Self { bind, socket: None }
    }

    fn bind_socket(&self, port: u16) -> std::io::Result<UdpSocket> {
        match UdpSocket::bind((self.bind, port)) {
            Err(e) if e.kind() == ErrorKind::AddrInUse => {
                info!(port, "Broadcast port busy locally, using an ephemeral source port");
                UdpSocket::bind((self.bind, 0))
            }
            other => other,
        }
    }
}

impl DatagramSender for UdpBroadcaster {
    fn open(&mut self, port: u16) -> CapResult<()> {
        let socket = self
            .bind_socket(port)
            .and_then(|s| s.set_broadcast(true).map(|_| s))
            .map_err(|e| CapabilityError::SocketOpen {
                port,
                reason: e.to_string(),
            })?;
        if let Ok(local) = socket.local_addr() {
            debug!(%local, "Broadcast socket ready");
        }
        self.socket = Some(socket);
        Ok(())
    }

    fn send_broadcast(&mut self, payload: &[u8], port: u16) -> CapResult<()> {
        let socket = self.socket.as_ref().ok_or(CapabilityError::NotOpen)?;
        socket
            .send_to(payload, SocketAddrV4::new(BROADCAST_ADDR, port))
            .map(|_| ())
            .map_err(|e| CapabilityError::Send(e.to_string()))
    }
}

/// Logs the physical pin level instead of driving a GPIO.
pub struct TracingIndicator {
    pin: u8,
    polarity: Polarity,
}

impl TracingIndicator {
    pub fn new(pin: u8, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }
}

impl Indicator for TracingIndicator {
    fn set_level(&mut self, level: IndicatorLevel) {
        let physical = self.polarity.to_physical(level);
        debug!(pin = self.pin, ?level, ?physical, "Indicator");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_network_joins_after_delay() {
        let clock = MonotonicClock::new();
        let mut net = SimulatedNetwork::new(clock, Some(0), Ipv4Addr::LOCALHOST);
        assert_eq!(net.status(), NetworkStatus::NotJoined);
        assert_eq!(net.local_address(), None);

        net.request_join("lab-net", "secret");
        assert_eq!(net.status(), NetworkStatus::Joined);
        assert_eq!(net.local_address(), Some(Ipv4Addr::LOCALHOST));
    }

    #[test]
    fn test_simulated_network_never_joins_without_delay() {
        let mut net = SimulatedNetwork::new(MonotonicClock::new(), None, Ipv4Addr::LOCALHOST);
        net.request_join("lab-net", "secret");
        assert_eq!(net.status(), NetworkStatus::NotJoined);
    }

    #[test]
    fn test_send_before_open_fails() {
        let mut tx = UdpBroadcaster::new(Ipv4Addr::UNSPECIFIED);
        assert!(matches!(
            tx.send_broadcast(b"x", 10666),
            Err(CapabilityError::NotOpen)
        ));
    }

    #[test]
    fn test_open_falls_back_when_port_busy() {
        let holder = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        let port = holder.local_addr().unwrap().port();

        let mut tx = UdpBroadcaster::new(Ipv4Addr::LOCALHOST);
        tx.open(port).unwrap();
        let local = tx.socket.as_ref().unwrap().local_addr().unwrap();
        assert_ne!(local.port(), port);
    }
}
