// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dependency staging: generated resources and the module manifest.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use super::tools::go::GoTool;
use super::tools::{Tool, ToolContext};
use crate::error::{FsError, FypError, Result};

/// Runs `go generate` and `go mod tidy` at most once per command.
#[derive(Debug, Default)]
pub struct DependencyStager {
    staged: AtomicBool,
}

impl DependencyStager {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            staged: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn is_staged(&self) -> bool {
        self.staged.load(Ordering::Acquire)
    }

    /// Generates resources if a generator exists, ensures the build
    /// directory exists, then tidies the module.
    ///
    /// A failed run leaves the stager unstaged so a later call retries.
    ///
    /// # Errors
    ///
    /// Returns a `ToolchainError` from the toolchain or an `FsError` if the
    /// build directory cannot be created.
    pub async fn stage(&self, ctx: &ToolContext) -> Result<()> {
        if self.is_staged() {
            debug!("Dependencies already staged");
            return Ok(());
        }

        let paths = &ctx.config().paths;
        let root = paths.root();

        if paths.resources_generator.is_file() {
            GoTool::new()
                .module_dir(root)
                .generator(&paths.resources_generator)
                .generate_op()
                .run(ctx)
                .await?;
        } else {
            debug!(
                generator = %paths.resources_generator.display(),
                "No resource generator, skipping go generate"
            );
        }

        if ctx.is_dry_run() {
            info!(dir = %paths.build.display(), "[dry-run] Would create build directory");
        } else {
            tokio::fs::create_dir_all(&paths.build)
                .await
                .map_err(|e| FypError::from(FsError::from_io(&paths.build, e)))?;
        }

        GoTool::new().module_dir(root).mod_tidy_op().run(ctx).await?;

        self.staged.store(true, Ordering::Release);
        info!("Dependencies staged");
        Ok(())
    }
}
