// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;

use crate::error::FsError;

/// Removes a file. Returns whether anything was removed.
///
/// # Errors
///
/// Returns an `FsError` for any failure other than the file being absent.
pub async fn remove_file_if_exists(path: &Path) -> Result<bool, FsError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FsError::from_io(path, e)),
    }
}

/// Removes a directory tree. Returns whether anything was removed.
///
/// # Errors
///
/// Returns an `FsError` for any failure other than the directory being absent.
pub async fn remove_dir_if_exists(path: &Path) -> Result<bool, FsError> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FsError::from_io(path, e)),
    }
}

/// Deletes `path` if present and creates it again, empty.
///
/// # Errors
///
/// Returns an `FsError` if removal or creation fails.
pub async fn recreate_dir(path: &Path) -> Result<(), FsError> {
    remove_dir_if_exists(path).await?;
    fs::create_dir_all(path)
        .await
        .map_err(|e| FsError::from_io(path, e))
}
