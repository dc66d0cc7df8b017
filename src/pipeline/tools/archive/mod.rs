// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Archive tool for packaging a staging directory into a zip file.
//!
//! ```text
//! ArchiveTool (cwd = staging dir)
//!   unix:    zip -r -q <archive> .
//!   windows: powershell -NoProfile -NonInteractive -Command
//!              Compress-Archive -Path .\* -DestinationPath '<archive>' -Force
//! ```
//!
//! The archiver is chosen by the host, not by the platform being packaged.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use super::{BoxFuture, Tool, ToolContext, invoke, resolve};
use crate::core::host::Platform;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{FypError, Result, Stage};

/// External archiver used on a given host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Archiver {
    /// Info-ZIP `zip`.
    Zip,
    /// `PowerShell`'s `Compress-Archive` cmdlet.
    CompressArchive,
}

impl Archiver {
    #[must_use]
    pub const fn for_host(host: Platform) -> Self {
        match host {
            Platform::Windows => Self::CompressArchive,
            Platform::Macos | Platform::Linux => Self::Zip,
        }
    }

    const fn tool_name(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::CompressArchive => "powershell",
        }
    }

    /// Arguments for archiving the working directory into `archive`.
    #[must_use]
    pub fn arguments(self, archive: &Path) -> Vec<String> {
        match self {
            Self::Zip => vec![
                "-r".to_string(),
                "-q".to_string(),
                archive.display().to_string(),
                ".".to_string(),
            ],
            Self::CompressArchive => vec![
                "-NoProfile".to_string(),
                "-NonInteractive".to_string(),
                "-Command".to_string(),
                format!(
                    "Compress-Archive -Path .\\* -DestinationPath '{}' -Force",
                    archive.display()
                ),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArchiveTool {
    source_dir: Option<PathBuf>,
    archive: Option<PathBuf>,
    archiver: Archiver,
}

impl ArchiveTool {
    #[must_use]
    pub const fn new(archiver: Archiver) -> Self {
        Self {
            source_dir: None,
            archive: None,
            archiver,
        }
    }

    /// Directory whose contents end up at the root of the archive.
    #[must_use]
    pub fn source_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.source_dir = Some(path.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn archive(mut self, path: impl AsRef<Path>) -> Self {
        self.archive = Some(path.as_ref().to_path_buf());
        self
    }

    fn archiver_builder(&self, ctx: &ToolContext) -> Result<ProcessBuilder> {
        let tools = &ctx.config().tools;
        let executable = match self.archiver {
            Archiver::Zip => &tools.zip,
            Archiver::CompressArchive => &tools.powershell,
        };
        resolve(self.stage(), self.name(), executable).map_err(|e| FypError::from(e).into())
    }

    async fn do_archive(&self, ctx: &ToolContext) -> Result<()> {
        let source_dir = self
            .source_dir
            .as_deref()
            .context("ArchiveTool: source_dir is required")?;
        let archive = self
            .archive
            .as_deref()
            .context("ArchiveTool: archive is required")?;

        if ctx.is_dry_run() {
            info!(
                archiver = self.name(),
                source = %source_dir.display(),
                archive = %archive.display(),
                "[dry-run] Would create archive"
            );
            return Ok(());
        }

        let builder = self
            .archiver_builder(ctx)?
            .args(self.archiver.arguments(archive))
            .cwd(source_dir);

        debug!(source = %source_dir.display(), "Archiving");
        invoke(self.stage(), self.name(), builder).await?;
        info!(archive = %archive.display(), "Archive created successfully");
        Ok(())
    }
}

impl Tool for ArchiveTool {
    fn name(&self) -> &'static str {
        self.archiver.tool_name()
    }

    fn stage(&self) -> Stage {
        Stage::Package
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_archive(ctx))
    }
}

#[cfg(test)]
mod tests;
