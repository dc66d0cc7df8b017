// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-platform distribution archives.
//!
//! ```text
//! 1. recreate <dist>
//! 2. <resources>     --> <dist>/resources
//!    <env_template>  --> <dist>/.env
//! 3. stage, compile client --> <dist>/<client><ext>
//! 4. remove <root>/<prefix>-<platform>.zip
//! 5. archive <dist>/* --> <root>/<prefix>-<platform>.zip
//!    (partial archive removed on failure)
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, warn};

use super::Pipeline;
use super::target::Target;
use super::tools::Tool;
use super::tools::archive::{ArchiveTool, Archiver};
use crate::config::Config;
use crate::core::host::Platform;
use crate::error::{FypError, Result, Stage, StageFailed};
use crate::utility::fs::copy::{copy_dir_contents_async, copy_file_async};
use crate::utility::fs::remove::{recreate_dir, remove_file_if_exists};

/// Where one packaging run stages files and writes its archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    platform: Platform,
    staging_dir: PathBuf,
    archive_name: String,
    archive_path: PathBuf,
}

impl PackageManifest {
    #[must_use]
    pub fn new(config: &Config, platform: Platform) -> Self {
        let archive_name = config.package.archive_name(platform.name());
        Self {
            platform,
            staging_dir: config.paths.dist.clone(),
            archive_path: config.paths.root().join(&archive_name),
            archive_name,
        }
    }

    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn staging_dir(&self) -> &Path {
        &self.staging_dir
    }

    #[must_use]
    pub fn archive_name(&self) -> &str {
        &self.archive_name
    }

    #[must_use]
    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }
}

impl Pipeline {
    /// Builds the distribution archive for `platform`.
    ///
    /// # Errors
    ///
    /// Returns the failing step with its stage context: `package` for the
    /// staging tree and the archive, `dependency-staging` or `compile` for
    /// the client build.
    pub async fn package(&self, platform: Platform) -> Result<PackageManifest> {
        let manifest = PackageManifest::new(self.config(), platform);
        info!(
            platform = %platform,
            archive = manifest.archive_name(),
            "Packaging"
        );

        self.prepare_staging(&manifest)
            .await
            .context(StageFailed(Stage::Package))?;

        let binary = self
            .compile_into(Target::Client, platform, manifest.staging_dir())
            .await?;
        info!(binary = %binary.display(), "Client staged");

        self.write_archive(&manifest)
            .await
            .context(StageFailed(Stage::Package))?;

        info!(archive = %manifest.archive_path().display(), "Package created");
        Ok(manifest)
    }

    async fn prepare_staging(&self, manifest: &PackageManifest) -> Result<()> {
        let paths = &self.config().paths;
        let staging = manifest.staging_dir();
        let resources = staging.join("resources");
        let env_file = staging.join(".env");

        if self.is_dry_run() {
            info!(dir = %staging.display(), "[dry-run] Would recreate staging directory");
            info!(
                from = %paths.resources.display(),
                to = %resources.display(),
                "[dry-run] Would copy resources"
            );
            info!(
                from = %paths.env_template.display(),
                to = %env_file.display(),
                "[dry-run] Would copy env template"
            );
            return Ok(());
        }

        recreate_dir(staging).await.map_err(FypError::from)?;
        copy_dir_contents_async(&paths.resources, &resources)
            .await
            .map_err(FypError::from)?;
        copy_file_async(&paths.env_template, &env_file)
            .await
            .map_err(FypError::from)?;
        info!(dir = %staging.display(), "Staging directory prepared");
        Ok(())
    }

    async fn write_archive(&self, manifest: &PackageManifest) -> Result<()> {
        let archive = manifest.archive_path();

        if self.is_dry_run() {
            info!(path = %archive.display(), "[dry-run] Would remove existing archive");
        } else if remove_file_if_exists(archive)
            .await
            .map_err(FypError::from)?
        {
            info!(path = %archive.display(), "Removed previous archive");
        }

        let result = ArchiveTool::new(Archiver::for_host(self.host.platform()))
            .source_dir(manifest.staging_dir())
            .archive(archive)
            .run(&self.ctx)
            .await;

        if result.is_err() && !self.is_dry_run() {
            match remove_file_if_exists(archive).await {
                Ok(true) => warn!(path = %archive.display(), "Removed partial archive"),
                Ok(false) => {}
                Err(e) => warn!(error = %e, "Failed to remove partial archive"),
            }
        }
        result
    }
}
