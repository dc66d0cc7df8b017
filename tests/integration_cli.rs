// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the `fyp` binary and its argument parsing.

use std::path::Path;
use std::process::{Command, Output};

use clap::Parser;
use fyp_build::cli::args::PackageArgs;
use fyp_build::cli::{Cli, Command as FypCommand};
use fyp_build::core::host::Platform;

fn fyp(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fyp"))
        .arg("-C")
        .arg(root)
        .args(args)
        .env_remove("FYP_GLOBAL__DRY")
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_package_every_platform() {
    for platform in Platform::ALL {
        let cli = Cli::try_parse_from(["fyp", "package", "-p", platform.name()]).unwrap();
        assert_eq!(
            cli.command,
            Some(FypCommand::Package(PackageArgs { platform }))
        );
    }
}

#[test]
fn cli_repeated_config_and_set() {
    let cli = Cli::try_parse_from([
        "fyp",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "-s",
        "network/tcp_port=1",
        "--set",
        "network/udp_port=2",
        "run",
    ])
    .unwrap();
    assert_eq!(cli.global.configs.len(), 2);
    assert_eq!(cli.global.options.len(), 2);
    assert_eq!(cli.command, Some(FypCommand::Run));
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn binary_version_prints_package_version() {
    let dir = tempfile::tempdir().unwrap();
    let output = fyp(dir.path(), &["version"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        env!("CARGO_PKG_VERSION")
    );
}

#[test]
fn binary_unknown_command_exits_with_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = fyp(dir.path(), &["deploy"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn binary_unknown_platform_exits_with_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = fyp(dir.path(), &["package", "--platform", "beos"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn binary_options_reads_project_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("fyp.toml"),
        "[network]\ntcp_port = 9100\n",
    )
    .unwrap();

    let output = fyp(dir.path(), &["-s", "network/udp_port=9101", "options"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("network."))
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    network.server_address    = 127.0.0.1
    network.tcp_port          = 9100
    network.udp_port          = 9101
    ");
}

#[test]
fn binary_options_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = fyp(dir.path(), &["options", "--json"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["package"]["archive_prefix"], "fyp-build");
}

#[test]
fn binary_invalid_config_names_configuration_stage() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("fyp.toml"), "[network]\ntcp_port = 0\n").unwrap();

    let output = fyp(dir.path(), &["options"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("Error: stage 'configuration' failed"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn binary_missing_toolchain_names_staging_stage() {
    let dir = tempfile::tempdir().unwrap();
    let output = fyp(
        dir.path(),
        &["-l", "0", "-s", "tools/go=fyp-test-no-such-go", "build_server"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("Error: stage 'dependency-staging' failed"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn binary_dry_build_touches_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = fyp(
        dir.path(),
        &["--dry", "-s", "tools/go=fyp-test-no-such-go", "build"],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(!dir.path().join("build").exists());
    assert!(stderr(&output).contains("[dry-run] Would run go build"));
}
