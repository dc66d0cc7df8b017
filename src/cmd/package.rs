// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Package command implementation.

use tracing::info;

use crate::core::host::Platform;
use crate::error::Result;
use crate::pipeline::Pipeline;

/// Packages the client for `platform`.
///
/// # Errors
///
/// Returns the failing packaging step with its stage context.
pub async fn run_package_command(pipeline: &Pipeline, platform: Platform) -> Result<()> {
    let manifest = pipeline.package(platform).await?;
    if !pipeline.is_dry_run() {
        println!("{}", manifest.archive_path().display());
    }
    info!(platform = %platform, "Packaging completed successfully");
    Ok(())
}
