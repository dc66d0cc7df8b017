// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.env` file loading.
//!
//! The format is the one the server reads itself: one `KEY=VALUE` per
//! line, split on the first `=`, values taken verbatim. Blank lines,
//! `#` comments and lines without `=` are skipped.

use std::path::Path;

use super::container::Env;
use crate::error::FsError;

/// Parses `.env` formatted text.
#[must_use]
pub fn parse(contents: &str) -> Env {
    let mut env = Env::new();
    for line in contents.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=')
            && !key.is_empty()
        {
            env.set(key, value);
        }
    }
    env
}

/// Loads a `.env` file, returning an empty environment if it does not exist.
///
/// # Errors
///
/// Returns `FsError` if the file exists but cannot be read.
pub fn load(path: &Path) -> std::result::Result<Env, FsError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let env = parse(&contents);
            tracing::debug!(path = %path.display(), vars = env.len(), "loaded env file");
            Ok(env)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Env::new()),
        Err(e) => Err(FsError::from_io(path, e)),
    }
}
