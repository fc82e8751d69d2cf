// BootCast - Boot Broadcast Sequencer
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const DEFAULT_BROADCAST_PORT: u16 = 10666;
pub const DEFAULT_IDENTIFICATION_PAYLOAD: &str = "ESP8266_BOOT1";
pub const DEFAULT_FAST_BLINK_INTERVAL_MS: u32 = 200;
pub const DEFAULT_BROADCAST_INTER_SEND_DELAY_MS: u32 = 100;
pub const DEFAULT_SLOW_BLINK_INTERVAL_MS: u32 = 1000;
pub const DEFAULT_BROADCAST_COUNT: u8 = 3;
/// GPIO2 carries the built-in LED on most ESP8266 modules.
pub const DEFAULT_INDICATOR_PIN: u8 = 2;

/// Default schema version for YAML configs
fn default_schema_version() -> String {
    "1.0".to_string()
}

fn default_network_name() -> String {
    "<YOUR_SSID>".to_string()
}

fn default_credential() -> String {
    "<YOUR_PASSWORD>".to_string()
}

fn default_broadcast_port() -> u16 {
    DEFAULT_BROADCAST_PORT
}

fn default_identification_payload() -> String {
    DEFAULT_IDENTIFICATION_PAYLOAD.to_string()
}

fn default_fast_blink_interval_ms() -> u32 {
    DEFAULT_FAST_BLINK_INTERVAL_MS
}

fn default_broadcast_inter_send_delay_ms() -> u32 {
    DEFAULT_BROADCAST_INTER_SEND_DELAY_MS
}

fn default_slow_blink_interval_ms() -> u32 {
    DEFAULT_SLOW_BLINK_INTERVAL_MS
}

fn default_broadcast_count() -> u8 {
    DEFAULT_BROADCAST_COUNT
}

fn default_indicator_pin() -> u8 {
    DEFAULT_INDICATOR_PIN
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported schema_version '{0}'. Supported versions: '1.0'")]
    UnsupportedSchema(String),
    #[error("'network_name' cannot be empty")]
    EmptyNetworkName,
    #[error("'identification_payload' cannot be empty")]
    EmptyPayload,
    #[error("'broadcast_port' must be non-zero")]
    ZeroPort,
    #[error("'broadcast_count' must be greater than zero")]
    ZeroBroadcastCount,
    #[error("Interval '{0}' must be greater than zero")]
    ZeroInterval(&'static str),
}

/// Wiring of the status indicator.
///
/// `active_high = false` means the output must be driven low to light it,
/// which is how the built-in LED of the reference board is wired.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IndicatorBinding {
    #[serde(default = "default_indicator_pin")]
    pub pin: u8,
    #[serde(default)]
    pub active_high: bool,
}

impl Default for IndicatorBinding {
    fn default() -> Self {
        Self {
            pin: DEFAULT_INDICATOR_PIN,
            active_high: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SequencerConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    #[serde(default = "default_network_name")]
    pub network_name: String,
    #[serde(default = "default_credential")]
    pub credential: String,
    #[serde(default = "default_broadcast_port")]
    pub broadcast_port: u16,
    #[serde(default = "default_identification_payload")]
    pub identification_payload: String,
    #[serde(default = "default_fast_blink_interval_ms")]
    pub fast_blink_interval_ms: u32,
    #[serde(default = "default_broadcast_inter_send_delay_ms")]
    pub broadcast_inter_send_delay_ms: u32,
    #[serde(default = "default_slow_blink_interval_ms")]
    pub slow_blink_interval_ms: u32,
    #[serde(default = "default_broadcast_count")]
    pub broadcast_count: u8,
    #[serde(default)]
    pub indicator: IndicatorBinding,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            network_name: default_network_name(),
            credential: default_credential(),
            broadcast_port: DEFAULT_BROADCAST_PORT,
            identification_payload: default_identification_payload(),
            fast_blink_interval_ms: DEFAULT_FAST_BLINK_INTERVAL_MS,
            broadcast_inter_send_delay_ms: DEFAULT_BROADCAST_INTER_SEND_DELAY_MS,
            slow_blink_interval_ms: DEFAULT_SLOW_BLINK_INTERVAL_MS,
            broadcast_count: DEFAULT_BROADCAST_COUNT,
            indicator: IndicatorBinding::default(),
        }
    }
}

// Keeps the credential out of logs.
impl fmt::Debug for SequencerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequencerConfig")
            .field("schema_version", &self.schema_version)
            .field("network_name", &self.network_name)
            .field("credential", &"<redacted>")
            .field("broadcast_port", &self.broadcast_port)
            .field("identification_payload", &self.identification_payload)
            .field("fast_blink_interval_ms", &self.fast_blink_interval_ms)
            .field(
                "broadcast_inter_send_delay_ms",
                &self.broadcast_inter_send_delay_ms,
            )
            .field("slow_blink_interval_ms", &self.slow_blink_interval_ms)
            .field("broadcast_count", &self.broadcast_count)
            .field("indicator", &self.indicator)
            .finish()
    }
}

impl SequencerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {:?}", path.as_ref()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config at {:?}", path.as_ref()))
    }

    /// Parse and validate a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(content).context("Failed to parse Sequencer Config YAML")?;
        config.validate()?;
        tracing::debug!(?config, "Loaded sequencer config");
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.schema_version != "1.0" {
            return Err(ConfigError::UnsupportedSchema(self.schema_version.clone()));
        }
        if self.network_name.trim().is_empty() {
            return Err(ConfigError::EmptyNetworkName);
        }
        if self.identification_payload.is_empty() {
            return Err(ConfigError::EmptyPayload);
        }
        if self.broadcast_port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        if self.broadcast_count == 0 {
            return Err(ConfigError::ZeroBroadcastCount);
        }
        if self.fast_blink_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("fast_blink_interval_ms"));
        }
        if self.slow_blink_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("slow_blink_interval_ms"));
        }
        Ok(())
    }

    pub fn payload_bytes(&self) -> &[u8] {
        self.identification_payload.as_bytes()
    }
}
