// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use super::{ArchiveTool, Archiver};
use crate::config::Config;
use crate::core::host::Platform;
use crate::pipeline::tools::test_utils::{dry_run_lines, run_with_logs};
use crate::pipeline::tools::{Tool, ToolContext};

#[test]
fn test_archiver_follows_host() {
    assert_eq!(Archiver::for_host(Platform::Windows), Archiver::CompressArchive);
    assert_eq!(Archiver::for_host(Platform::Linux), Archiver::Zip);
    assert_eq!(Archiver::for_host(Platform::Macos), Archiver::Zip);
}

#[test]
fn test_archiver_arguments() {
    let archive = Path::new("/work/fyp-build-linux.zip");
    insta::assert_snapshot!(
        Archiver::Zip.arguments(archive).join(" "),
        @"-r -q /work/fyp-build-linux.zip ."
    );
    insta::assert_snapshot!(
        Archiver::CompressArchive.arguments(archive).join(" "),
        @r"-NoProfile -NonInteractive -Command Compress-Archive -Path .\* -DestinationPath '/work/fyp-build-linux.zip' -Force"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn test_archive_dry_run() -> Result<()> {
    let (logs, outcome) = run_with_logs(|| async {
        let ctx = ToolContext::new(Arc::new(Config::default()), true);
        ArchiveTool::new(Archiver::Zip)
            .source_dir("/work/dist")
            .archive("/work/fyp-build-windows.zip")
            .run(&ctx)
            .await
    })
    .await?;
    outcome?;

    let lines = dry_run_lines(&logs);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[dry-run] Would create archive"));
    assert!(lines[0].contains("archive=/work/fyp-build-windows.zip"));
    Ok(())
}

#[cfg(unix)]
#[tokio::test(flavor = "current_thread")]
async fn test_archive_runs_in_source_dir() {
    use crate::pipeline::tools::test_utils::{config_at, write_script};

    let dir = tempfile::tempdir().unwrap();
    let staging = dir.path().join("dist");
    std::fs::create_dir_all(&staging).unwrap();
    let zip = write_script(dir.path(), "fake-zip", "pwd > \"$3\"");
    let config = config_at(dir.path(), &format!("[tools]\nzip = \"{}\"\n", zip.display()));
    let ctx = ToolContext::new(Arc::new(config), false);

    let archive = dir.path().join("out.zip");
    ArchiveTool::new(Archiver::Zip)
        .source_dir(&staging)
        .archive(&archive)
        .run(&ctx)
        .await
        .unwrap();

    let cwd = std::fs::read_to_string(&archive).unwrap();
    assert_eq!(
        std::fs::canonicalize(cwd.trim()).unwrap(),
        std::fs::canonicalize(&staging).unwrap()
    );
}
