// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::sync::Arc;

use super::clean::{CleanPlan, run_clean_command};
use super::quality::run_format_command;
use super::run::{run_coupled_command, run_single_command};
use crate::cli::args::CleanArgs;
use crate::core::host::{HostInfo, Platform};
use crate::pipeline::Pipeline;
use crate::pipeline::target::Target;
use crate::pipeline::tools::test_utils::{config_at, dry_run_lines, message_of, run_with_logs};

fn pipeline_at(root: &Path, dry_run: bool) -> Pipeline {
    Pipeline::new(
        Arc::new(config_at(root, "")),
        HostInfo::new(Platform::Linux, None),
        dry_run,
    )
}

fn dry_run_messages(logs: &str) -> String {
    dry_run_lines(logs)
        .into_iter()
        .map(message_of)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_clean_plan_scope() {
    let config = config_at(Path::new("/work"), "");
    let plan = CleanPlan::new(&config, false);
    assert_eq!(plan.dirs, vec![Path::new("/work/build").to_path_buf()]);
    assert!(plan.files.is_empty());

    let all = CleanPlan::new(&config, true);
    let listed: Vec<String> = all
        .dirs
        .iter()
        .chain(&all.files)
        .map(|p| p.display().to_string())
        .collect();
    insta::assert_snapshot!(listed.join("\n"), @r"
    /work/build
    /work/dist
    /work/fyp-build-windows.zip
    /work/fyp-build-macos.zip
    /work/fyp-build-linux.zip
    ");
}

#[tokio::test(flavor = "current_thread")]
async fn test_clean_all_removes_outputs() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let root = dir.path();
    std::fs::create_dir_all(root.join("build/windows"))?;
    std::fs::write(root.join("build/game"), "bin")?;
    std::fs::create_dir_all(root.join("dist/resources"))?;
    std::fs::write(root.join("fyp-build-linux.zip"), "zip")?;
    std::fs::write(root.join("notes.zip"), "keep")?;

    run_clean_command(&CleanArgs { all: true }, &pipeline_at(root, false)).await?;

    assert!(!root.join("build").exists());
    assert!(!root.join("dist").exists());
    assert!(!root.join("fyp-build-linux.zip").exists());
    assert!(root.join("notes.zip").exists());
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn test_clean_keeps_dist_without_all() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let root = dir.path();
    std::fs::create_dir_all(root.join("build"))?;
    std::fs::create_dir_all(root.join("dist"))?;

    run_clean_command(&CleanArgs::default(), &pipeline_at(root, false)).await?;

    assert!(!root.join("build").exists());
    assert!(root.join("dist").exists());
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn test_clean_dry_run_removes_nothing() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::create_dir_all(dir.path().join("build"))?;
    let pipeline = pipeline_at(dir.path(), true);
    let args = CleanArgs { all: true };

    let (logs, outcome) = run_with_logs(|| run_clean_command(&args, &pipeline)).await?;
    outcome?;

    assert!(dir.path().join("build").exists());
    insta::assert_snapshot!(dry_run_messages(&logs), @r"
    [dry-run] Would remove directory
    [dry-run] Would remove directory
    [dry-run] Would remove file
    [dry-run] Would remove file
    [dry-run] Would remove file
    ");
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn test_format_dry_run_counts_go_sources() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let root = dir.path();
    std::fs::create_dir_all(root.join("src/cmd/client"))?;
    std::fs::create_dir_all(root.join("src/vendor/lib"))?;
    std::fs::write(root.join("src/cmd/client/main.go"), "package main\n")?;
    std::fs::write(root.join("src/util.go"), "package util\n")?;
    std::fs::write(root.join("src/vendor/lib/lib.go"), "package lib\n")?;
    std::fs::write(root.join("src/README.md"), "docs\n")?;
    let pipeline = pipeline_at(root, true);

    let (logs, outcome) = run_with_logs(|| run_format_command(&pipeline)).await?;
    outcome?;

    let lines = dry_run_lines(&logs);
    assert_eq!(lines.len(), 1);
    insta::assert_snapshot!(lines[0], @"[dry-run] Would format with gofumpt files=2");
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn test_format_missing_source_dir_fails_in_format_stage() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let err = run_format_command(&pipeline_at(dir.path(), true))
        .await
        .unwrap_err();
    let message = format!("{err:#}");
    assert!(
        message.starts_with("stage 'format' failed: filesystem error: path not found:"),
        "{message}"
    );
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn test_run_dry_run_builds_then_launches() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let pipeline = pipeline_at(dir.path(), true);

    let (logs, outcome) = run_with_logs(|| run_coupled_command(&pipeline, true)).await?;
    outcome?;

    assert!(!dir.path().join("logs").exists());
    insta::assert_snapshot!(dry_run_messages(&logs), @r"
    [dry-run] Would create log session
    [dry-run] Would create build directory
    [dry-run] Would run go mod tidy
    [dry-run] Would remove stale binary
    [dry-run] Would run go build
    [dry-run] Would remove stale binary
    [dry-run] Would run go build
    [dry-run] Would launch server, then client
    ");
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn test_run_single_dry_run_launches_one_target() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let pipeline = pipeline_at(dir.path(), true);

    let (logs, outcome) = run_with_logs(|| run_single_command(&pipeline, Target::Server)).await?;
    outcome?;

    let lines = dry_run_lines(&logs);
    assert_eq!(lines.first().copied().map(message_of), Some("[dry-run] Would create log session"));
    assert_eq!(lines.last().copied().map(message_of), Some("[dry-run] Would launch"));
    assert_eq!(lines.iter().filter(|l| l.contains("go build")).count(), 1);
    Ok(())
}

#[test]
fn test_options_json_round_trips() {
    let config = config_at(Path::new("/work"), "[network]\ntcp_port = 9000\n");
    let json = serde_json::to_string_pretty(&config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["network"]["tcp_port"], 9000);
    assert_eq!(value["targets"]["client_binary"], "game");
}
