// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source formatting and static analysis.
//!
//! ```text
//! FormatTool  gofumpt -w -extra <file>...
//! LintTool    golangci-lint run            (cwd = module root)
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use super::{BoxFuture, Tool, ToolContext, invoke, resolve};
use crate::error::{FypError, Result, Stage};

/// Rewrites Go sources in place with `gofumpt`.
#[derive(Debug, Clone, Default)]
pub struct FormatTool {
    files: Vec<PathBuf>,
}

impl FormatTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.files = files
            .into_iter()
            .map(|p| p.as_ref().to_path_buf())
            .collect();
        self
    }

    async fn do_format(&self, ctx: &ToolContext) -> Result<()> {
        if self.files.is_empty() {
            info!("No Go sources to format");
            return Ok(());
        }

        if ctx.is_dry_run() {
            info!(files = self.files.len(), "[dry-run] Would format with gofumpt");
            return Ok(());
        }

        let builder = resolve(self.stage(), self.name(), &ctx.config().tools.gofumpt)
            .map_err(FypError::from)?
            .args(["-w", "-extra"])
            .args(self.files.iter().map(|p| p.display().to_string()));

        debug!(files = self.files.len(), "Formatting");
        invoke(self.stage(), self.name(), builder).await?;
        info!(files = self.files.len(), "Formatting completed successfully");
        Ok(())
    }
}

impl Tool for FormatTool {
    fn name(&self) -> &'static str {
        "gofumpt"
    }

    fn stage(&self) -> Stage {
        Stage::Format
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_format(ctx))
    }
}

/// Runs `golangci-lint` over the module.
#[derive(Debug, Clone, Default)]
pub struct LintTool {
    module_dir: Option<PathBuf>,
}

impl LintTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn module_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.module_dir = Some(path.as_ref().to_path_buf());
        self
    }

    async fn do_lint(&self, ctx: &ToolContext) -> Result<()> {
        let module_dir = self
            .module_dir
            .as_deref()
            .context("LintTool: module_dir is required")?;

        if ctx.is_dry_run() {
            info!(cwd = %module_dir.display(), "[dry-run] Would run golangci-lint");
            return Ok(());
        }

        let builder = resolve(self.stage(), self.name(), &ctx.config().tools.golangci_lint)
            .map_err(FypError::from)?
            .arg("run")
            .cwd(module_dir);

        debug!("Linting");
        invoke(self.stage(), self.name(), builder).await?;
        info!("Lint completed successfully");
        Ok(())
    }
}

impl Tool for LintTool {
    fn name(&self) -> &'static str {
        "golangci-lint"
    }

    fn stage(&self) -> Stage {
        Stage::Lint
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_lint(ctx))
    }
}
