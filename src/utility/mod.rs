// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   walk:   find_files(), WalkOptions
//!   copy:   copy_dir_contents_async(), copy_file_async()
//!   remove: remove_file_if_exists(), remove_dir_if_exists(), recreate_dir()
//! ```

pub mod fs;
