// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Go toolchain wrapper.
//!
//! ```text
//! GoTool
//! Operations: ModTidy | Generate | Build
//!   mod tidy            cwd = module root
//!   generate <file>     cwd = module root
//!   build -C <src> -o <out> <entry>   (GOOS set when cross-compiling)
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use super::{BoxFuture, Tool, ToolContext, invoke, resolve};
use crate::core::env::current_env;
use crate::core::host::TARGET_OS_VAR;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{FypError, Result, Stage};

/// Go operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoOperation {
    /// Reconcile `go.mod` with the imports in the module.
    #[default]
    ModTidy,
    /// Run `go generate` on a single file.
    Generate,
    /// Compile a package into a binary.
    Build,
}

impl GoOperation {
    const fn stage(self) -> Stage {
        match self {
            Self::ModTidy | Self::Generate => Stage::DependencyStaging,
            Self::Build => Stage::Compile,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GoTool {
    module_dir: Option<PathBuf>,
    generator: Option<PathBuf>,
    source_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    entry: Option<String>,
    target_os: Option<&'static str>,
    operation: GoOperation,
}

impl GoTool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding `go.mod`; working directory for tidy and generate.
    #[must_use]
    pub fn module_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.module_dir = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn generator(mut self, path: impl AsRef<Path>) -> Self {
        self.generator = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn source_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.source_dir = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn output(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = Some(entry.into());
        self
    }

    /// Sets the toolchain target OS. `None` leaves the inherited value alone.
    #[must_use]
    pub const fn target_os(mut self, os: Option<&'static str>) -> Self {
        self.target_os = os;
        self
    }

    #[must_use]
    pub const fn mod_tidy_op(mut self) -> Self {
        self.operation = GoOperation::ModTidy;
        self
    }

    #[must_use]
    pub const fn generate_op(mut self) -> Self {
        self.operation = GoOperation::Generate;
        self
    }

    #[must_use]
    pub const fn build_op(mut self) -> Self {
        self.operation = GoOperation::Build;
        self
    }

    #[must_use]
    pub const fn operation(&self) -> GoOperation {
        self.operation
    }

    fn go_builder(&self, ctx: &ToolContext) -> Result<ProcessBuilder> {
        resolve(self.stage(), self.name(), &ctx.config().tools.go)
            .map_err(|e| FypError::from(e).into())
    }

    fn module_dir_required(&self) -> Result<&Path> {
        self.module_dir
            .as_deref()
            .context("GoTool: module_dir is required")
    }

    async fn do_mod_tidy(&self, ctx: &ToolContext) -> Result<()> {
        let module_dir = self.module_dir_required()?;

        if ctx.is_dry_run() {
            info!(cwd = %module_dir.display(), "[dry-run] Would run go mod tidy");
            return Ok(());
        }

        let builder = self
            .go_builder(ctx)?
            .args(["mod", "tidy"])
            .cwd(module_dir);

        debug!("Tidying Go module");
        invoke(self.stage(), self.name(), builder).await?;
        info!("go mod tidy completed successfully");
        Ok(())
    }

    async fn do_generate(&self, ctx: &ToolContext) -> Result<()> {
        let module_dir = self.module_dir_required()?;
        let generator = self
            .generator
            .as_deref()
            .context("GoTool: generator is required")?;

        if ctx.is_dry_run() {
            info!(
                generator = %generator.display(),
                "[dry-run] Would run go generate"
            );
            return Ok(());
        }

        let builder = self
            .go_builder(ctx)?
            .arg("generate")
            .arg(generator)
            .cwd(module_dir);

        debug!(generator = %generator.display(), "Generating resources");
        invoke(self.stage(), self.name(), builder).await?;
        info!("go generate completed successfully");
        Ok(())
    }

    async fn do_build(&self, ctx: &ToolContext) -> Result<()> {
        let source_dir = self
            .source_dir
            .as_deref()
            .context("GoTool: source_dir is required")?;
        let output = self
            .output
            .as_deref()
            .context("GoTool: output is required")?;
        let entry = self
            .entry
            .as_deref()
            .unwrap_or(ctx.config().targets.entry.as_str());

        if ctx.is_dry_run() {
            info!(
                source = %source_dir.display(),
                output = %output.display(),
                target_os = self.target_os.unwrap_or("inherited"),
                "[dry-run] Would run go build"
            );
            return Ok(());
        }

        let mut builder = self
            .go_builder(ctx)?
            .arg("build")
            .arg("-C")
            .arg(source_dir)
            .arg("-o")
            .arg(output)
            .arg(entry);

        if let Some(os) = self.target_os {
            let mut env = current_env();
            env.set(TARGET_OS_VAR, os);
            builder = builder.env(env);
        }

        debug!(
            source = %source_dir.display(),
            target_os = ?self.target_os,
            "Compiling"
        );
        invoke(self.stage(), self.name(), builder).await?;
        info!(output = %output.display(), "go build completed successfully");
        Ok(())
    }
}

impl Tool for GoTool {
    fn name(&self) -> &'static str {
        "go"
    }

    fn stage(&self) -> Stage {
        self.operation.stage()
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            match self.operation {
                GoOperation::ModTidy => self.do_mod_tidy(ctx).await,
                GoOperation::Generate => self.do_generate(ctx).await,
                GoOperation::Build => self.do_build(ctx).await,
            }
        })
    }
}
