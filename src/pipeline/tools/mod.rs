// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! External toolchain wrappers.
//!
//! ```text
//! Pipeline --> ToolContext --> Tool::run --> ProcessBuilder
//!   go (mod tidy, generate, build)
//!   archive (zip / Compress-Archive)
//!   quality (gofumpt, golangci-lint)
//!
//! ProcessError --> ToolchainError { stage, tool, ... }
//! ```
//!
//! Every tool honours `ToolContext::is_dry_run` by logging the invocation
//! it would make and returning success.

use std::path::Path;
use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::config::Config;
use crate::core::process::builder::{ProcessBuilder, ProcessExit};
use crate::error::{FypError, ProcessError, Result, Stage, ToolchainError};

pub mod archive;
pub mod go;
pub mod quality;

/// Context provided to tools during execution.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// When true, tools log what they would run without running it.
    dry_run: bool,

    config: Arc<Config>,
}

impl ToolContext {
    #[must_use]
    pub const fn new(config: Arc<Config>, dry_run: bool) -> Self {
        Self { dry_run, config }
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Trait for tools that execute external processes.
///
/// Each tool encapsulates one external operation (`go build`, `zip`, ...)
/// and reports failures as [`ToolchainError`] tagged with [`Tool::stage`].
pub trait Tool: Send + Sync {
    /// Returns the name of this tool (e.g., "go", "zip", "gofumpt").
    fn name(&self) -> &str;

    /// Pipeline stage a failure of this tool is attributed to.
    fn stage(&self) -> Stage;

    /// Executes the tool's operation.
    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>>;
}

/// Resolves a configured executable, either a bare name looked up in `PATH`
/// or a path to the binary.
pub(crate) fn resolve(
    stage: Stage,
    tool: &str,
    executable: &Path,
) -> std::result::Result<ProcessBuilder, ToolchainError> {
    ProcessBuilder::which(&executable.to_string_lossy())
        .map(|builder| builder.name(tool))
        .map_err(|e| toolchain_failure(stage, tool, e))
}

/// Runs a toolchain command to completion.
///
/// # Errors
///
/// Returns a [`ToolchainError`] (wrapped in [`FypError`]) if the command
/// cannot be started or exits unsuccessfully.
pub(crate) async fn invoke(
    stage: Stage,
    tool: &str,
    builder: ProcessBuilder,
) -> Result<ProcessExit> {
    builder
        .run()
        .await
        .map_err(|e| FypError::from(toolchain_failure(stage, tool, e)).into())
}

/// Maps a process failure onto the toolchain error for `stage`.
pub(crate) fn toolchain_failure(stage: Stage, tool: &str, err: ProcessError) -> ToolchainError {
    match err {
        ProcessError::NonZeroExit { code, .. } => ToolchainError::NonZeroExit {
            stage,
            tool: tool.to_string(),
            code,
        },
        other => ToolchainError::InvocationFailed {
            stage,
            tool: tool.to_string(),
            message: other.to_string(),
        },
    }
}

#[cfg(test)]
pub(crate) mod test_utils;
#[cfg(test)]
mod tests;
