// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-run log sessions.
//!
//! ```text
//! <logs>/
//!   2026-10-16/
//!     142501/        game.log  server.log
//!     142501-1/      second run within the same second
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::FsError;

/// Directory holding the log files of one run-family invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSession {
    dir: PathBuf,
}

impl LogSession {
    /// Creates a session directory for the current wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns `FsError` if the directory cannot be created.
    pub fn create(logs_root: &Path) -> std::result::Result<Self, FsError> {
        Self::create_at(logs_root, Local::now())
    }

    /// Creates a session directory for `at`.
    ///
    /// If the directory for that second already exists a numeric suffix is
    /// appended until an unused name is found.
    ///
    /// # Errors
    ///
    /// Returns `FsError` if the directory cannot be created.
    pub fn create_at(
        logs_root: &Path,
        at: DateTime<Local>,
    ) -> std::result::Result<Self, FsError> {
        let base = Self::path_for(logs_root, at);
        let parent = base.parent().unwrap_or(logs_root);
        std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;

        let mut dir = base.clone();
        let mut suffix = 0u32;
        loop {
            match std::fs::create_dir(&dir) {
                Ok(()) => break,
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    suffix += 1;
                    let mut name = base.as_os_str().to_os_string();
                    name.push(format!("-{suffix}"));
                    dir = PathBuf::from(name);
                }
                Err(e) => return Err(FsError::from_io(&dir, e)),
            }
        }

        tracing::debug!(dir = %dir.display(), "log session created");
        Ok(Self { dir })
    }

    /// Deterministic session path for a timestamp, before uniqueness suffixes.
    #[must_use]
    pub fn path_for(logs_root: &Path, at: DateTime<Local>) -> PathBuf {
        logs_root
            .join(at.format("%Y-%m-%d").to_string())
            .join(at.format("%H%M%S").to_string())
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Log file for a target binary stem, e.g. `game` -> `<dir>/game.log`.
    #[must_use]
    pub fn log_file(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{stem}.log"))
    }
}
