// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader, PathsConfig};
use crate::error::ConfigError;
use crate::logging::LogLevel;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.targets.client_binary, "game");
    assert_eq!(config.targets.server_binary, "server");
    assert_eq!(config.targets.entry, "main.go");
    assert_eq!(config.network.server_address, "127.0.0.1");
    assert_eq!(config.network.tcp_port, 8080);
    assert_eq!(config.network.udp_port, 8081);
    assert_eq!(config.package.archive_name("linux"), "fyp-build-linux.zip");
    assert_eq!(config.run.shutdown_timeout(), Duration::from_secs(10));
}

#[test]
fn test_paths_resolve_against_root() {
    let mut paths = PathsConfig {
        root: Some(PathBuf::from("/work/fyp")),
        dist: PathBuf::from("/tmp/staging"),
        ..PathsConfig::default()
    };
    paths.resolve().unwrap();

    assert_eq!(paths.root(), Path::new("/work/fyp"));
    assert_eq!(paths.build, Path::new("/work/fyp/build"));
    assert_eq!(paths.client_src, Path::new("/work/fyp/src/cmd/client"));
    assert_eq!(
        paths.resources_generator,
        Path::new("/work/fyp/resources/resources_gen.go")
    );
    assert_eq!(paths.env_file, Path::new("/work/fyp/.env"));
    assert_eq!(paths.dist, Path::new("/tmp/staging"), "absolute paths are kept");
}

#[test]
fn test_paths_default_root_is_absolute() {
    let config = Config::parse("").unwrap();
    assert!(config.paths.root().is_absolute());
    assert!(config.paths.build.starts_with(config.paths.root()));
}

#[test]
fn test_config_parse_sections() {
    let config = Config::parse(
        r#"
[network]
server_address = "192.168.1.20"
tcp_port = 9000

[targets]
client_binary = "client"

[tools]
go = "/usr/local/go/bin/go"

[run]
shutdown_timeout_secs = 3
"#,
    )
    .unwrap();

    assert_eq!(config.network.server_address, "192.168.1.20");
    assert_eq!(config.network.tcp_port, 9000);
    assert_eq!(config.network.udp_port, 8081, "unset keys keep defaults");
    assert_eq!(config.targets.client_binary, "client");
    assert_eq!(config.tools.go, Path::new("/usr/local/go/bin/go"));
    assert_eq!(config.run.shutdown_timeout(), Duration::from_secs(3));
}

#[test]
fn test_config_unknown_key_rejected() {
    let err = Config::parse("[network]\nport = 1\n").unwrap_err();
    assert!(err.to_string().contains("port"), "{err}");
}

#[test]
fn test_config_zero_port_rejected() {
    let err = Config::parse("[network]\nudp_port = 0\n").unwrap_err();
    let config_err = err.downcast_ref::<ConfigError>().unwrap();
    insta::assert_snapshot!(
        config_err.to_string(),
        @"invalid value for 'udp_port' in section '[network]': port must not be 0"
    );
}

#[test]
fn test_config_identical_binaries_rejected() {
    let err = Config::parse("[targets]\nclient_binary = \"server\"\n").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_format_options_aligned() {
    let config = Config::parse("[paths]\nroot = \"/srv/fyp\"\n").unwrap();
    let lines = config.format_options();

    assert!(lines.iter().any(|l| l.ends_with("= /srv/fyp/build")));
    let positions: Vec<_> = lines.iter().filter_map(|l| l.find(" = ")).collect();
    assert!(positions.windows(2).all(|w| w[0] == w[1]), "values aligned");

    let keys: Vec<_> = lines
        .iter()
        .map(|l| l.split_whitespace().next().unwrap_or_default())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
}

#[test]
fn test_config_loader_add_toml_file_not_found() {
    let result = ConfigLoader::new()
        .add_toml_file("/nonexistent/path/to/fyp.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_config_loader_optional_file_missing_is_ok() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/fyp.toml");
    assert!(loader.loaded_files().is_empty());
    assert!(loader.build().is_ok());
}

#[test]
fn test_config_loader_invalid_toml() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "this is not valid toml {{{{{{").unwrap();

    let err = ConfigLoader::new().add_toml_file(file.path()).build().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: the variable name is unique to this test
    unsafe {
        std::env::set_var("FYPTESTENV_NETWORK__TCP_PORT", "9100");
    }

    let config = ConfigLoader::new()
        .add_toml_str("[network]\ntcp_port = 9000")
        .with_env_prefix("FYPTESTENV")
        .build()
        .unwrap();

    // SAFETY: same as above
    unsafe {
        std::env::remove_var("FYPTESTENV_NETWORK__TCP_PORT");
    }

    assert_eq!(config.network.tcp_port, 9100, "env var should override TOML");
}

#[test]
fn test_config_loader_overrides() {
    let config = ConfigLoader::new()
        .add_toml_str("[network]\ntcp_port = 9000")
        .with_overrides(&["network/tcp_port=9500", "targets/client_binary=fyp-game"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.network.tcp_port, 9500);
    assert_eq!(config.targets.client_binary, "fyp-game");
}

#[test]
fn test_config_loader_malformed_override() {
    let err = ConfigLoader::new()
        .with_overrides(&["network.tcp_port=1"])
        .err()
        .unwrap();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'network.tcp_port=1' in section '[set]': expected section/key=value"
    );
}

#[test]
fn test_config_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\n dry = false")
        .set("global.dry", true)
        .unwrap()
        .build()
        .unwrap();

    assert!(config.global.dry, "set override should take effect");
}

#[test]
fn test_config_loader_layered_sources() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[network]
tcp_port = 7000
udp_port = 7001

[package]
archive_prefix = "from-file"
"#
    )
    .unwrap();

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .add_toml_str("[network]\ntcp_port = 7100\n")
        .build()
        .unwrap();

    assert_eq!(config.network.tcp_port, 7100, "later source wins");
    assert_eq!(config.network.udp_port, 7001, "file value should persist");
    assert_eq!(config.package.archive_prefix, "from-file");
}
