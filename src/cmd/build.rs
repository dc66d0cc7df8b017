// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command implementation.

use tracing::info;

use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::pipeline::target::Target;

/// Stages dependencies once and compiles `targets` for the host.
///
/// # Errors
///
/// Returns the first staging or compile failure.
pub async fn run_build_command(pipeline: &Pipeline, targets: &[Target]) -> Result<()> {
    let outputs = pipeline.compile_all(targets).await?;
    for output in &outputs {
        info!(path = %output.display(), "Built");
    }
    info!(count = outputs.len(), "Build completed successfully");
    Ok(())
}
