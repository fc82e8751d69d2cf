// BootCast - Boot Broadcast Sequencer
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! The boot sequencer: a three-state machine polled from a single loop.
//!
//! `AcquiringNetwork -> Broadcasting -> SteadyBlink`, never backwards. Every
//! poll does at most one state's worth of work. The only blocking section is
//! the one-shot broadcast burst, bounded by
//! `(broadcast_count - 1) * broadcast_inter_send_delay_ms`.

use crate::blink::BlinkTimer;
use crate::capabilities::{DatagramSender, Indicator, NetworkClient, NetworkStatus};
use crate::clock::{ClockSample, Delay};
use crate::metrics::SequencerMetrics;
use crate::signals::IndicatorLevel;
use crate::snapshot::SequencerSnapshot;
use bootcast_config::SequencerConfig;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencerState {
    AcquiringNetwork,
    Broadcasting,
    SteadyBlink,
}

impl SequencerState {
    pub fn is_terminal(self) -> bool {
        self == SequencerState::SteadyBlink
    }
}

pub struct Sequencer<N, S, I, D> {
    config: SequencerConfig,
    network: N,
    sender: S,
    indicator: I,
    delay: D,
    state: SequencerState,
    initialized: bool,
    // Set on the first join request and never cleared.
    join_requested: bool,
    blink: BlinkTimer,
    metrics: SequencerMetrics,
}

impl<N, S, I, D> Sequencer<N, S, I, D>
where
    N: NetworkClient,
    S: DatagramSender,
    I: Indicator,
    D: Delay,
{
    pub fn new(config: SequencerConfig, network: N, sender: S, indicator: I, delay: D) -> Self {
        let blink = BlinkTimer::new(config.fast_blink_interval_ms);
        Self {
            config,
            network,
            sender,
            indicator,
            delay,
            state: SequencerState::AcquiringNetwork,
            initialized: false,
            join_requested: false,
            blink,
            metrics: SequencerMetrics::new(),
        }
    }

    /// One-time setup: indicator unlit, no network action. Repeat calls are no-ops.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        info!("=================================");
        info!("BootCast: UDP broadcast on boot");
        info!("=================================");
        self.indicator.set_level(IndicatorLevel::Unlit);
        self.blink.force(IndicatorLevel::Unlit);
        self.initialized = true;
    }

    /// Advance the machine by one step and return the state now active.
    ///
    /// Must be called from a tight loop. Only the poll that runs the
    /// broadcast burst blocks, and only for the inter-send pauses.
    pub fn poll(&mut self, now: ClockSample) -> SequencerState {
        self.initialize();
        self.metrics.record_poll();

        match self.state {
            SequencerState::AcquiringNetwork => self.poll_acquiring(now),
            SequencerState::Broadcasting => self.broadcast_burst(now),
            SequencerState::SteadyBlink => self.poll_steady(now),
        }

        self.state
    }

    fn poll_acquiring(&mut self, now: ClockSample) {
        if self.network.status() == NetworkStatus::Joined {
            self.enter_broadcasting(now);
            return;
        }

        if !self.join_requested {
            info!(network = %self.config.network_name, "Connecting to network");
            self.network
                .request_join(&self.config.network_name, &self.config.credential);
            self.join_requested = true;
            self.metrics.record_join_request();
        }

        if let Some(level) = self.blink.poll(now) {
            self.indicator.set_level(level);
            self.metrics.record_toggle();
            debug!(now = now.as_millis(), ?level, "Waiting for network");
        }
    }

    fn enter_broadcasting(&mut self, now: ClockSample) {
        match self.network.local_address() {
            Some(addr) => info!(%addr, "Network joined"),
            None => info!("Network joined (no address reported)"),
        }

        if let Err(e) = self.sender.open(self.config.broadcast_port) {
            warn!("Broadcast socket setup failed: {}", e);
        }

        // Lit from this poll onwards; the burst runs on the next one.
        self.indicator.set_level(IndicatorLevel::Lit);
        self.blink.force(IndicatorLevel::Lit);
        self.state = SequencerState::Broadcasting;
        self.metrics.broadcasting_entered_at = Some(now);
    }

    fn broadcast_burst(&mut self, now: ClockSample) {
        let total = self.config.broadcast_count;
        let port = self.config.broadcast_port;
        info!(total, port, "Sending UDP broadcasts (indicator held lit)");

        for attempt in 0..total {
            let result = self
                .sender
                .send_broadcast(self.config.payload_bytes(), port);
            match &result {
                Ok(()) => info!("Broadcast sent ({}/{})", attempt + 1, total),
                Err(e) => warn!("Broadcast {}/{} failed: {}", attempt + 1, total, e),
            }
            self.metrics.record_broadcast(result.is_ok());

            if attempt + 1 < total {
                self.delay
                    .delay_ms(self.config.broadcast_inter_send_delay_ms);
            }
        }

        info!("Broadcasts complete, starting heartbeat");
        self.blink.rebase(self.config.slow_blink_interval_ms, now);
        self.state = SequencerState::SteadyBlink;
        self.metrics.steady_blink_entered_at = Some(now);
    }

    fn poll_steady(&mut self, now: ClockSample) {
        if let Some(level) = self.blink.poll(now) {
            self.indicator.set_level(level);
            self.metrics.record_toggle();
            debug!(
                "Indicator: {}",
                if level.is_lit() { "ON" } else { "OFF" }
            );
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn indicator_level(&self) -> IndicatorLevel {
        self.blink.level()
    }

    pub fn join_requested(&self) -> bool {
        self.join_requested
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    pub fn metrics(&self) -> &SequencerMetrics {
        &self.metrics
    }

    pub fn snapshot(&self) -> SequencerSnapshot {
        SequencerSnapshot {
            state: self.state,
            indicator: self.blink.level(),
            join_requested: self.join_requested,
            last_toggle: self.blink.last_toggle(),
            blink_interval_ms: self.blink.interval_ms(),
            metrics: self.metrics.clone(),
        }
    }
}
