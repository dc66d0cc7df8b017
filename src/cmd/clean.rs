// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clean command implementation.
//!
//! ```text
//! clean          <build>/
//! clean --all    <build>/  <dist>/  <root>/<prefix>-{windows,macos,linux}.zip
//! ```

use std::path::PathBuf;

use anyhow::Context;
use tracing::{debug, info};

use crate::cli::args::CleanArgs;
use crate::config::Config;
use crate::core::host::Platform;
use crate::error::{FypError, Result, Stage, StageFailed};
use crate::pipeline::Pipeline;
use crate::utility::fs::remove::{remove_dir_if_exists, remove_file_if_exists};

/// Directories and files removed by a clean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanPlan {
    pub dirs: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl CleanPlan {
    #[must_use]
    pub fn new(config: &Config, all: bool) -> Self {
        let paths = &config.paths;
        let mut plan = Self {
            dirs: vec![paths.build.clone()],
            files: Vec::new(),
        };
        if all {
            plan.dirs.push(paths.dist.clone());
            plan.files.extend(
                Platform::ALL
                    .iter()
                    .map(|p| paths.root().join(config.package.archive_name(p.name()))),
            );
        }
        plan
    }
}

/// Removes build outputs.
///
/// # Errors
///
/// Returns a `clean` stage failure if anything cannot be removed.
pub async fn run_clean_command(args: &CleanArgs, pipeline: &Pipeline) -> Result<()> {
    let plan = CleanPlan::new(pipeline.config(), args.all);
    clean(&plan, pipeline.is_dry_run())
        .await
        .context(StageFailed(Stage::Clean))
}

async fn clean(plan: &CleanPlan, dry_run: bool) -> Result<()> {
    let mut removed = 0usize;

    for dir in &plan.dirs {
        if dry_run {
            info!(path = %dir.display(), "[dry-run] Would remove directory");
        } else if remove_dir_if_exists(dir).await.map_err(FypError::from)? {
            info!(path = %dir.display(), "Removed");
            removed += 1;
        } else {
            debug!(path = %dir.display(), "nothing to remove");
        }
    }

    for file in &plan.files {
        if dry_run {
            info!(path = %file.display(), "[dry-run] Would remove file");
        } else if remove_file_if_exists(file).await.map_err(FypError::from)? {
            info!(path = %file.display(), "Removed");
            removed += 1;
        }
    }

    if !dry_run {
        info!(removed, "Clean completed");
    }
    Ok(())
}
