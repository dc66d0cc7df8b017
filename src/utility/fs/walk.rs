// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bon::Builder;
use ignore::WalkBuilder;
use tracing::warn;

use crate::error::FsError;

/// Options for directory traversal.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Maximum depth to traverse (None = unlimited)
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    /// Include hidden files/directories
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
    /// Respect .gitignore and .ignore files
    #[builder(setters(name = with_respect_gitignore), default = true)]
    respect_gitignore: bool,
    /// Skip directories matching these names (exact match)
    #[builder(setters(name = with_skip_dirs), default)]
    skip_dirs: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    #[must_use]
    pub const fn respect_gitignore(&self) -> bool {
        self.respect_gitignore
    }

    #[must_use]
    pub fn skip_dirs(&self) -> &[String] {
        &self.skip_dirs
    }

    /// Options for collecting Go sources to format.
    ///
    /// Ignore files are not consulted, so gitignored (e.g. generated) sources
    /// are formatted too. Vendored modules and hidden directories are left
    /// untouched.
    #[must_use]
    pub fn for_go_sources() -> Self {
        Self::builder()
            .with_respect_gitignore(false)
            .with_skip_dirs(vec!["vendor".to_string(), ".git".to_string()])
            .build()
    }
}

/// Builds a `WalkBuilder` with the given options, using `filter_entry` for directory skipping.
pub(super) fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    if let Some(depth) = options.max_depth() {
        builder.max_depth(Some(depth));
    }

    builder.hidden(!options.include_hidden());

    builder.git_ignore(options.respect_gitignore());
    builder.git_global(options.respect_gitignore());
    builder.git_exclude(options.respect_gitignore());
    builder.ignore(options.respect_gitignore());

    // Evaluated before descending, so skipped trees are never read.
    if !options.skip_dirs().is_empty() {
        let skip_dirs: Arc<Vec<String>> = Arc::new(options.skip_dirs().to_vec());
        builder.filter_entry(move |entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir())
                && let Some(name) = entry.file_name().to_str()
                && skip_dirs.iter().any(|skip| skip == name)
            {
                return false;
            }
            true
        });
    }

    builder
}

/// Finds every file under `root` with the given extension.
///
/// A single iterative walk; the result is sorted so callers see a stable
/// order. Unreadable entries are logged and skipped.
///
/// # Errors
///
/// Returns `FsError::NotFound` if `root` does not exist.
///
/// # Example
/// ```no_run
/// use fyp_build::utility::fs::walk::{find_files, WalkOptions};
///
/// let sources = find_files("src", "go", &WalkOptions::for_go_sources())?;
/// println!("Found {} Go files", sources.len());
/// # Ok::<(), fyp_build::error::FsError>(())
/// ```
pub fn find_files<P: AsRef<Path>>(
    root: P,
    extension: &str,
    options: &WalkOptions,
) -> Result<Vec<PathBuf>, FsError> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(FsError::NotFound(root.display().to_string()));
    }

    let mut files: Vec<PathBuf> = build_walker(root, options)
        .build()
        .filter_map(|entry_result| match entry_result {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "walk error");
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(ignore::DirEntry::into_path)
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect();

    files.sort();
    Ok(files)
}
