// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use tokio::fs;
use tracing::warn;

use crate::error::FsError;

/// Recursively copies all contents from `src` into `dst`.
///
/// Creates `dst` if it doesn't exist. Existing files in `dst` are overwritten.
/// Symlinks are never descended into: a link to a file is copied as a regular
/// file with the target's contents, any other link is skipped with a warning.
///
/// # Example
/// ```no_run
/// use fyp_build::utility::fs::copy::copy_dir_contents_async;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), fyp_build::error::FsError> {
/// copy_dir_contents_async(Path::new("resources"), Path::new("dist/resources")).await?;
/// # Ok(())
/// # }
/// ```
/// # Errors
///
/// Returns an `FsError` naming the path of the first failed operation.
pub async fn copy_dir_contents_async(src: &Path, dst: &Path) -> Result<(), FsError> {
    fs::create_dir_all(dst)
        .await
        .map_err(|e| FsError::from_io(dst, e))?;

    let mut entries = fs::read_dir(src)
        .await
        .map_err(|e| FsError::from_io(src, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| FsError::from_io(src, e))?
    {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| FsError::from_io(&src_path, e))?;

        if file_type.is_dir() {
            Box::pin(copy_dir_contents_async(&src_path, &dst_path)).await?;
        } else if file_type.is_symlink() {
            match fs::metadata(&src_path).await {
                Ok(meta) if meta.is_file() => copy_file_async(&src_path, &dst_path).await?,
                _ => warn!(path = %src_path.display(), "skipping symlink that is not a file"),
            }
        } else {
            copy_file_async(&src_path, &dst_path).await?;
        }
    }

    Ok(())
}

/// Copies a single file, replacing `dst` if it exists.
///
/// # Errors
///
/// Returns an `FsError` for the source if it cannot be read, otherwise for
/// the destination.
pub async fn copy_file_async(src: &Path, dst: &Path) -> Result<(), FsError> {
    fs::copy(src, dst).await.map_err(|e| {
        if src.exists() {
            FsError::from_io(dst, e)
        } else {
            FsError::from_io(src, e)
        }
    })?;
    Ok(())
}
