// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! root/                      (default: current directory)
//!   build/                   host binaries, build/<platform>/ for others
//!   logs/<date>/<time>/      per-run log sessions
//!   src/
//!     cmd/client/  cmd/server/
//!   resources/
//!     resources_gen.go
//!   .env.example  .env
//!   dist/                    package staging
//! ```
//!
//! Relative paths are resolved against `root`, which is made absolute.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Project layout, relative to `root` until resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Project root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Build output directory.
    pub build: PathBuf,
    /// Root of the log session tree.
    pub logs: PathBuf,
    /// Source tree walked by `format`.
    pub src: PathBuf,
    pub client_src: PathBuf,
    pub server_src: PathBuf,
    /// Resource tree shipped with packages.
    pub resources: PathBuf,
    /// `go generate` input; skipped when absent.
    pub resources_generator: PathBuf,
    /// Copied to `<dist>/.env` when packaging.
    pub env_template: PathBuf,
    /// Loaded into the environment of launched targets when present.
    pub env_file: PathBuf,
    /// Package staging directory.
    pub dist: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: None,
            build: PathBuf::from("build"),
            logs: PathBuf::from("logs"),
            src: PathBuf::from("src"),
            client_src: PathBuf::from("src/cmd/client"),
            server_src: PathBuf::from("src/cmd/server"),
            resources: PathBuf::from("resources"),
            resources_generator: PathBuf::from("resources/resources_gen.go"),
            env_template: PathBuf::from(".env.example"),
            env_file: PathBuf::from(".env"),
            dist: PathBuf::from("dist"),
        }
    }
}

impl PathsConfig {
    /// Makes `root` absolute and resolves every other path against it.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if the root cannot be made absolute.
    pub fn resolve(&mut self) -> Result<()> {
        let root = self.root.clone().unwrap_or_else(|| PathBuf::from("."));
        let root = std::path::absolute(&root).map_err(|e| ConfigError::InvalidValue {
            section: "paths".to_string(),
            key: "root".to_string(),
            message: format!("cannot resolve '{}': {e}", root.display()),
        })?;

        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        };

        resolve(&mut self.build);
        resolve(&mut self.logs);
        resolve(&mut self.src);
        resolve(&mut self.client_src);
        resolve(&mut self.server_src);
        resolve(&mut self.resources);
        resolve(&mut self.resources_generator);
        resolve(&mut self.env_template);
        resolve(&mut self.env_file);
        resolve(&mut self.dist);

        self.root = Some(root);
        Ok(())
    }

    /// Project root; the current directory until [`PathsConfig::resolve`] runs.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_deref().unwrap_or_else(|| Path::new("."))
    }
}
