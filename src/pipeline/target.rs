// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build targets and their deterministic output paths.
//!
//! ```text
//! host platform      <build>/<stem><ext>
//! other platform     <build>/<platform>/<stem><ext>
//! explicit dir       <dir>/<stem><ext>
//! ```

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::core::host::{HostInfo, Platform};

/// One of the two programs this project builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The game client, run in the foreground.
    Client,
    /// The game server, run as a service next to the client.
    Server,
}

impl Target {
    pub const ALL: [Self; 2] = [Self::Client, Self::Server];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
        }
    }

    /// Binary file stem, e.g. `game`.
    #[must_use]
    pub fn stem<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            Self::Client => &config.targets.client_binary,
            Self::Server => &config.targets.server_binary,
        }
    }

    #[must_use]
    pub fn source_dir<'a>(&self, config: &'a Config) -> &'a Path {
        match self {
            Self::Client => &config.paths.client_src,
            Self::Server => &config.paths.server_src,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A target resolved against the configuration for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    target: Target,
    platform: Platform,
    source_dir: PathBuf,
    output: PathBuf,
}

impl BuildTarget {
    /// Output goes to the shared build directory.
    #[must_use]
    pub fn new(config: &Config, host: &HostInfo, target: Target, platform: Platform) -> Self {
        let dir = if host.is_cross(platform) {
            config.paths.build.join(platform.name())
        } else {
            config.paths.build.clone()
        };
        Self::into_dir(config, target, platform, &dir)
    }

    /// Output goes to `dir`.
    #[must_use]
    pub fn into_dir(config: &Config, target: Target, platform: Platform, dir: &Path) -> Self {
        let file_name = format!("{}{}", target.stem(config), platform.binary_extension());
        Self {
            target,
            platform,
            source_dir: target.source_dir(config).to_path_buf(),
            output: dir.join(file_name),
        }
    }

    #[must_use]
    pub const fn target(&self) -> Target {
        self.target
    }

    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }
}
