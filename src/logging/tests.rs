// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    let err = LogLevel::new(7).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-6, got 7"
    );
    assert!(LogLevel::try_from(9u8).is_err());
}

#[test]
fn test_log_level_filters_scope_to_crate() {
    let filters: Vec<_> = (0..=6u8)
        .filter_map(|level| LogLevel::new(level).ok())
        .map(LogLevel::to_filter_string)
        .collect();
    insta::assert_snapshot!(
        filters.join(","),
        @"off,fyp_build=error,fyp_build=warn,fyp_build=info,fyp_build=debug,fyp_build=trace,trace"
    );
}

#[test]
fn test_log_level_serde_roundtrip_rejects_out_of_range() {
    let level: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(level, LogLevel::DEBUG);
    assert!(serde_json::from_str::<LogLevel>("12").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}
