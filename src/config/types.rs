// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! Config: GlobalConfig, PathsConfig, TargetsConfig, NetworkConfig,
//!         ToolsConfig, PackageConfig, RunConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log toolchain invocations instead of running them.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Orchestrator log file. Target output never goes here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Output binary names and the entry file compiled for each target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetsConfig {
    pub client_binary: String,
    pub server_binary: String,
    /// Entry file inside each target's source directory.
    pub entry: String,
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            client_binary: "game".to_string(),
            server_binary: "server".to_string(),
            entry: "main.go".to_string(),
        }
    }
}

/// Address and ports shared by the server and the client of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    pub server_address: String,
    pub tcp_port: u16,
    pub udp_port: u16,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            server_address: "127.0.0.1".to_string(),
            tcp_port: 8080,
            udp_port: 8081,
        }
    }
}

/// External tool executables. Bare names are resolved via `PATH`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub go: PathBuf,
    pub gofumpt: PathBuf,
    pub golangci_lint: PathBuf,
    /// Archiver on Unix hosts.
    pub zip: PathBuf,
    /// Archiver on Windows hosts (`Compress-Archive`).
    pub powershell: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            go: PathBuf::from("go"),
            gofumpt: PathBuf::from("gofumpt"),
            golangci_lint: PathBuf::from("golangci-lint"),
            zip: PathBuf::from("zip"),
            powershell: PathBuf::from("powershell"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageConfig {
    /// Archives are named `<archive_prefix>-<platform>.zip`.
    pub archive_prefix: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            archive_prefix: "fyp-build".to_string(),
        }
    }
}

impl PackageConfig {
    #[must_use]
    pub fn archive_name(&self, platform: &str) -> String {
        format!("{}-{platform}.zip", self.archive_prefix)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// How long the server gets to exit after an interrupt before it is killed.
    pub shutdown_timeout_secs: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            shutdown_timeout_secs: 10,
        }
    }
}

impl RunConfig {
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}
