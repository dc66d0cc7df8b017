// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host and target platform resolution.
//!
//! ```text
//! Platform: Windows | Macos | Linux
//!   name()            "windows" / "macos" / "linux"
//!   toolchain_os()    "windows" / "darwin" / "linux"   (GOOS)
//!   binary_extension  ".exe"    / ""       / ""
//!   supports_interrupt false    / true     / true
//!
//! HostInfo::detect()
//!   platform = cfg!(target_os)
//!   kernel_release = uname().release   (unix)
//!   *-microsoft-standard-WSL2 --> toolchain_os_override = "linux"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable read by the toolchain to select the target OS.
pub const TARGET_OS_VAR: &str = "GOOS";

/// Kernel release suffix reported by WSL2 hosts.
const WSL2_RELEASE_SUFFIX: &str = "microsoft-standard-WSL2";

/// A platform the client can be built and packaged for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Macos,
    Linux,
}

impl Platform {
    pub const ALL: [Self; 3] = [Self::Windows, Self::Macos, Self::Linux];

    /// The platform this binary was compiled for.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Macos
        } else {
            Self::Linux
        }
    }

    /// Common platform name, as used on the CLI and in archive names.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Macos => "macos",
            Self::Linux => "linux",
        }
    }

    /// Platform identifier understood by the toolchain.
    #[must_use]
    pub const fn toolchain_os(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Macos => "darwin",
            Self::Linux => "linux",
        }
    }

    #[must_use]
    pub const fn binary_extension(&self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            Self::Macos | Self::Linux => "",
        }
    }

    /// Whether a running process can be asked to stop with an interrupt.
    #[must_use]
    pub const fn supports_interrupt(&self) -> bool {
        !matches!(self, Self::Windows)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "macos" | "darwin" => Ok(Self::Macos),
            "linux" => Ok(Self::Linux),
            _ => Err(ConfigError::UnknownPlatform(s.to_string())),
        }
    }
}

/// Identity of the machine running the orchestrator.
///
/// Constructed once per invocation and passed by reference to every
/// component that needs to know about the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    platform: Platform,
    kernel_release: Option<String>,
}

impl HostInfo {
    #[must_use]
    pub fn new(platform: Platform, kernel_release: Option<String>) -> Self {
        Self {
            platform,
            kernel_release,
        }
    }

    /// Detects the current host.
    #[must_use]
    pub fn detect() -> Self {
        let host = Self::new(Platform::host(), kernel_release());
        if host.is_wsl2() {
            tracing::debug!(
                release = host.kernel_release().unwrap_or_default(),
                "WSL2 host detected, toolchain will target linux"
            );
        }
        host
    }

    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn kernel_release(&self) -> Option<&str> {
        self.kernel_release.as_deref()
    }

    /// Linux running under WSL2, where an inherited Windows `GOOS` must not
    /// leak into host builds.
    #[must_use]
    pub fn is_wsl2(&self) -> bool {
        self.platform == Platform::Linux
            && self
                .kernel_release
                .as_deref()
                .is_some_and(|r| r.ends_with(WSL2_RELEASE_SUFFIX))
    }

    /// Toolchain OS forced for every build on this host, if any.
    #[must_use]
    pub fn toolchain_os_override(&self) -> Option<&'static str> {
        self.is_wsl2().then_some(Platform::Linux.toolchain_os())
    }

    /// Value for [`TARGET_OS_VAR`] when building for `target`.
    ///
    /// `None` means the toolchain environment is left as inherited.
    #[must_use]
    pub fn toolchain_target(&self, target: Platform) -> Option<&'static str> {
        if target == self.platform {
            self.toolchain_os_override()
        } else {
            Some(target.toolchain_os())
        }
    }

    #[must_use]
    pub fn is_cross(&self, target: Platform) -> bool {
        target != self.platform
    }
}

#[cfg(unix)]
fn kernel_release() -> Option<String> {
    nix::sys::utsname::uname()
        .ok()
        .map(|uts| uts.release().to_string_lossy().into_owned())
}

#[cfg(not(unix))]
const fn kernel_release() -> Option<String> {
    None
}
