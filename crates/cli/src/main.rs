// BootCast - Boot Broadcast Sequencer
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

mod host;

use anyhow::Context;
use bootcast_config::SequencerConfig;
use bootcast_core::{Clock, Polarity, Sequencer};
use clap::Parser;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

use host::{MonotonicClock, SimulatedNetwork, ThreadDelay, TracingIndicator, UdpBroadcaster};

const EXIT_OK: u8 = 0;
const EXIT_CONFIG_ERROR: u8 = 2;
const EXIT_RUNTIME_ERROR: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "BootCast host runner: join, broadcast, heartbeat",
    long_about = None
)]
struct Cli {
    /// Path to the sequencer config (YAML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable per-toggle debug output
    #[arg(short, long)]
    trace: bool,

    /// Simulated time from join request to association (ms)
    #[arg(long, default_value = "1500")]
    join_after_ms: u32,

    /// Simulate a network that never accepts the join
    #[arg(long, conflicts_with = "join_after_ms")]
    never_join: bool,

    /// Stop after this many milliseconds (runs forever when omitted)
    #[arg(long)]
    max_runtime_ms: Option<u64>,

    /// Write the final sequencer snapshot (JSON) to this path
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Local IPv4 address for the broadcast socket
    #[arg(long, default_value = "0.0.0.0")]
    bind: Ipv4Addr,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SequencerConfig> {
    match path {
        Some(path) => SequencerConfig::from_file(path),
        None => Ok(SequencerConfig::default()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level based on --trace flag
    if cli.trace {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {:#}", e);
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    match run(&cli, config) {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(e) => {
            error!("Runtime error: {:#}", e);
            ExitCode::from(EXIT_RUNTIME_ERROR)
        }
    }
}

fn run(cli: &Cli, config: SequencerConfig) -> anyhow::Result<()> {
    let clock = MonotonicClock::new();
    let join_delay = (!cli.never_join).then_some(cli.join_after_ms);
    let address = if cli.bind.is_unspecified() {
        Ipv4Addr::LOCALHOST
    } else {
        cli.bind
    };

    let indicator = TracingIndicator::new(
        config.indicator.pin,
        Polarity::from_active_high(config.indicator.active_high),
    );
    let mut sequencer = Sequencer::new(
        config,
        SimulatedNetwork::new(clock, join_delay, address),
        UdpBroadcaster::new(cli.bind),
        indicator,
        ThreadDelay,
    );

    sequencer.initialize();
    let mut phase = sequencer.state();
    info!(?phase, "Sequencer started");

    loop {
        let state = sequencer.poll(clock.now());
        if state != phase {
            info!(from = ?phase, to = ?state, "Phase changed");
            phase = state;
        }

        if let Some(max) = cli.max_runtime_ms {
            if clock.elapsed().as_millis() >= u128::from(max) {
                break;
            }
        }
        std::thread::yield_now();
    }

    let snapshot = sequencer.snapshot();
    info!(
        state = ?snapshot.state,
        polls = snapshot.metrics.polls,
        toggles = snapshot.metrics.indicator_toggles,
        sent = snapshot.metrics.broadcasts_sent,
        failed = snapshot.metrics.broadcast_failures,
        "Stopped"
    );

    if let Some(path) = &cli.snapshot {
        let json = snapshot
            .to_json_pretty()
            .context("Failed to serialize snapshot")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write snapshot to {:?}", path))?;
        info!("Snapshot written to {:?}", path);
    }

    Ok(())
}
