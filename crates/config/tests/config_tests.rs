// BootCast - Boot Broadcast Sequencer
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use bootcast_config::{ConfigError, SequencerConfig};
use std::io::Write;

#[test]
fn test_minimal_yaml_takes_defaults() {
    let yaml = r#"
network_name: "lab-net"
credential: "secret"
"#;
    let cfg = SequencerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(cfg.network_name, "lab-net");
    assert_eq!(cfg.credential, "secret");
    assert_eq!(cfg.broadcast_port, 10666);
    assert_eq!(cfg.identification_payload, "ESP8266_BOOT1");
    assert_eq!(cfg.broadcast_count, 3);
    assert_eq!(cfg.indicator.pin, 2);
    assert!(!cfg.indicator.active_high);
}

#[test]
fn test_full_yaml_parses() {
    let yaml = r#"
schema_version: "1.0"
network_name: "lab-net"
credential: "secret"
broadcast_port: 4000
identification_payload: "NODE_7"
fast_blink_interval_ms: 150
broadcast_inter_send_delay_ms: 50
slow_blink_interval_ms: 2000
broadcast_count: 5
indicator:
  pin: 13
  active_high: true
"#;
    let cfg = SequencerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(cfg.broadcast_port, 4000);
    assert_eq!(cfg.payload_bytes(), b"NODE_7");
    assert_eq!(cfg.fast_blink_interval_ms, 150);
    assert_eq!(cfg.broadcast_inter_send_delay_ms, 50);
    assert_eq!(cfg.slow_blink_interval_ms, 2000);
    assert_eq!(cfg.broadcast_count, 5);
    assert_eq!(cfg.indicator.pin, 13);
    assert!(cfg.indicator.active_high);
}

#[test]
fn test_unknown_keys_are_rejected() {
    let yaml = r#"
network_name: "lab-net"
broadcast_prot: 4000
"#;
    assert!(SequencerConfig::from_yaml_str(yaml).is_err());
}

#[test]
fn test_validation_errors() {
    let cases = [
        (
            SequencerConfig {
                schema_version: "2.0".to_string(),
                ..Default::default()
            },
            ConfigError::UnsupportedSchema("2.0".to_string()),
        ),
        (
            SequencerConfig {
                network_name: "  ".to_string(),
                ..Default::default()
            },
            ConfigError::EmptyNetworkName,
        ),
        (
            SequencerConfig {
                identification_payload: String::new(),
                ..Default::default()
            },
            ConfigError::EmptyPayload,
        ),
        (
            SequencerConfig {
                broadcast_port: 0,
                ..Default::default()
            },
            ConfigError::ZeroPort,
        ),
        (
            SequencerConfig {
                broadcast_count: 0,
                ..Default::default()
            },
            ConfigError::ZeroBroadcastCount,
        ),
        (
            SequencerConfig {
                fast_blink_interval_ms: 0,
                ..Default::default()
            },
            ConfigError::ZeroInterval("fast_blink_interval_ms"),
        ),
        (
            SequencerConfig {
                slow_blink_interval_ms: 0,
                ..Default::default()
            },
            ConfigError::ZeroInterval("slow_blink_interval_ms"),
        ),
    ];

    for (cfg, expected) in cases {
        assert_eq!(cfg.validate(), Err(expected));
    }
}

#[test]
fn test_from_file_reports_path_on_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "broadcast_port: 0").unwrap();

    let err = SequencerConfig::from_file(file.path()).unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.contains("Invalid config"), "{}", chain);
    assert!(chain.contains("non-zero"), "{}", chain);
}

#[test]
fn test_from_file_missing() {
    let err = SequencerConfig::from_file("/nonexistent/bootcast.yaml").unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read config"));
}
