// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Format and lint commands.

use anyhow::Context;
use tracing::info;

use crate::error::{FypError, Result, Stage, StageFailed};
use crate::pipeline::Pipeline;
use crate::pipeline::tools::Tool;
use crate::pipeline::tools::quality::{FormatTool, LintTool};
use crate::utility::fs::walk::{WalkOptions, find_files};

/// Formats every `.go` file under the source directory.
///
/// # Errors
///
/// Returns a `format` stage failure if the source directory is missing or
/// the formatter fails.
pub async fn run_format_command(pipeline: &Pipeline) -> Result<()> {
    format(pipeline).await.context(StageFailed(Stage::Format))
}

async fn format(pipeline: &Pipeline) -> Result<()> {
    let src = &pipeline.config().paths.src;
    let files = find_files(src, "go", &WalkOptions::for_go_sources()).map_err(FypError::from)?;
    info!(dir = %src.display(), files = files.len(), "Formatting");

    FormatTool::new().files(&files).run(pipeline.context()).await
}

/// Runs the linter over the project root.
///
/// # Errors
///
/// Returns a `lint` stage failure if the linter reports problems or cannot
/// be run.
pub async fn run_lint_command(pipeline: &Pipeline) -> Result<()> {
    LintTool::new()
        .module_dir(pipeline.config().paths.root())
        .run(pipeline.context())
        .await
        .context(StageFailed(Stage::Lint))
}
