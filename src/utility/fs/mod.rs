// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:   find_files()       ignore::Walk, iterative, sorted
//!         WalkOptions        max_depth, hidden, gitignore, skip_dirs
//! copy:   copy_dir_contents_async()  tokio::fs recursive copy
//!         copy_file_async()
//! remove: remove_file_if_exists(), remove_dir_if_exists(), recreate_dir()
//! ```
//!
//! Failures are reported as [`FsError`](crate::error::FsError) naming the path.

pub mod copy;
pub mod remove;
pub mod walk;

#[cfg(test)]
mod tests;
