// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Compilation of client and server binaries.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use super::Pipeline;
use super::target::{BuildTarget, Target};
use super::tools::Tool;
use super::tools::go::GoTool;
use crate::core::host::Platform;
use crate::error::{FsError, FypError, Result, Stage, StageFailed, ToolchainError};
use crate::utility::fs::remove::remove_file_if_exists;

impl Pipeline {
    /// Builds `target` for `platform` into the shared build directory.
    ///
    /// Dependencies are staged first if they have not been already.
    ///
    /// # Errors
    ///
    /// Returns a staging or compile failure, each with its stage context.
    pub async fn compile(&self, target: Target, platform: Platform) -> Result<PathBuf> {
        let build = BuildTarget::new(self.config(), &self.host, target, platform);
        self.compile_target(&build).await
    }

    /// Builds `target` for `platform` into `dir`.
    ///
    /// # Errors
    ///
    /// Returns a staging or compile failure, each with its stage context.
    pub async fn compile_into(
        &self,
        target: Target,
        platform: Platform,
        dir: &Path,
    ) -> Result<PathBuf> {
        let build = BuildTarget::into_dir(self.config(), target, platform, dir);
        self.compile_target(&build).await
    }

    /// Builds each target in order for the host platform.
    ///
    /// # Errors
    ///
    /// Stops at the first failure.
    pub async fn compile_all(&self, targets: &[Target]) -> Result<Vec<PathBuf>> {
        let mut outputs = Vec::with_capacity(targets.len());
        for &target in targets {
            outputs.push(self.compile(target, self.host.platform()).await?);
        }
        Ok(outputs)
    }

    async fn compile_target(&self, build: &BuildTarget) -> Result<PathBuf> {
        self.stage().await?;
        self.build_binary(build)
            .await
            .context(StageFailed(Stage::Compile))?;
        Ok(build.output().to_path_buf())
    }

    async fn build_binary(&self, build: &BuildTarget) -> Result<()> {
        let output = build.output();
        info!(
            target = %build.target(),
            platform = %build.platform(),
            "Compiling"
        );

        if self.is_dry_run() {
            info!(path = %output.display(), "[dry-run] Would remove stale binary");
        } else {
            if let Some(dir) = output.parent() {
                tokio::fs::create_dir_all(dir)
                    .await
                    .map_err(|e| FypError::from(FsError::from_io(dir, e)))?;
            }
            remove_file_if_exists(output)
                .await
                .map_err(FypError::from)?;
        }

        GoTool::new()
            .source_dir(build.source_dir())
            .output(output)
            .entry(&self.config().targets.entry)
            .target_os(self.host.toolchain_target(build.platform()))
            .build_op()
            .run(&self.ctx)
            .await?;

        if !self.is_dry_run() && !output.is_file() {
            return Err(FypError::from(ToolchainError::MissingArtifact {
                stage: Stage::Compile,
                target: build.target().name().to_string(),
                path: output.display().to_string(),
            })
            .into());
        }

        Ok(())
    }
}
