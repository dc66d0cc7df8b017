// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for fyp-build.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <root>/fyp.toml
//! 3. --config FILE (repeatable)
//! 4. FYP_* env vars
//! 5. --set section/key=value
//! 6. CLI flags (--root, --dry, log levels)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! FYP_GLOBAL__DRY=true          → global.dry = true
//! FYP_NETWORK__TCP_PORT=9000    → network.tcp_port = 9000
//! FYP_PATHS__BUILD=out          → paths.build = "out"
//! ```

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{GlobalConfig, NetworkConfig, PackageConfig, RunConfig, TargetsConfig, ToolsConfig};

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "fyp.toml";

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "FYP";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub paths: PathsConfig,
    pub targets: TargetsConfig,
    pub network: NetworkConfig,
    pub tools: ToolsConfig,
    pub package: PackageConfig,
    pub run: RunConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fyp_build::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("fyp.toml")
    ///     .with_env_prefix("FYP")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve all paths and validate values.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the root cannot be resolved or a value is
    /// out of range.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.paths.resolve()?;
        self.validate()?;
        Ok(())
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        let invalid = |section: &str, key: &str, message: &str| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            message: message.to_string(),
        };

        if self.network.tcp_port == 0 {
            return Err(invalid("network", "tcp_port", "port must not be 0"));
        }
        if self.network.udp_port == 0 {
            return Err(invalid("network", "udp_port", "port must not be 0"));
        }
        if self.network.server_address.trim().is_empty() {
            return Err(invalid("network", "server_address", "must not be empty"));
        }

        for (key, stem) in [
            ("client_binary", &self.targets.client_binary),
            ("server_binary", &self.targets.server_binary),
        ] {
            if stem.is_empty() || stem.contains(['/', '\\']) {
                return Err(invalid("targets", key, "must be a plain file name"));
            }
        }
        if self.targets.client_binary == self.targets.server_binary {
            return Err(invalid(
                "targets",
                "server_binary",
                "client and server binaries must differ",
            ));
        }
        if self.package.archive_prefix.is_empty() {
            return Err(invalid("package", "archive_prefix", "must not be empty"));
        }

        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Keys are sorted and values aligned.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_target_options(&mut options);
        self.format_tools_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        let paths = &self.paths;
        for (key, path) in [
            ("root", paths.root()),
            ("build", paths.build.as_path()),
            ("logs", paths.logs.as_path()),
            ("src", paths.src.as_path()),
            ("client_src", paths.client_src.as_path()),
            ("server_src", paths.server_src.as_path()),
            ("resources", paths.resources.as_path()),
            ("resources_generator", paths.resources_generator.as_path()),
            ("env_template", paths.env_template.as_path()),
            ("env_file", paths.env_file.as_path()),
            ("dist", paths.dist.as_path()),
        ] {
            options.insert(format!("paths.{key}"), path.display().to_string());
        }
    }

    fn format_target_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "targets.client_binary".into(),
            self.targets.client_binary.clone(),
        );
        options.insert(
            "targets.server_binary".into(),
            self.targets.server_binary.clone(),
        );
        options.insert("targets.entry".into(), self.targets.entry.clone());
        options.insert(
            "network.server_address".into(),
            self.network.server_address.clone(),
        );
        options.insert(
            "network.tcp_port".into(),
            self.network.tcp_port.to_string(),
        );
        options.insert(
            "network.udp_port".into(),
            self.network.udp_port.to_string(),
        );
        options.insert(
            "package.archive_prefix".into(),
            self.package.archive_prefix.clone(),
        );
        options.insert(
            "run.shutdown_timeout_secs".into(),
            self.run.shutdown_timeout_secs.to_string(),
        );
    }

    fn format_tools_options(&self, options: &mut BTreeMap<String, String>) {
        let tools = &self.tools;
        for (key, path) in [
            ("go", &tools.go),
            ("gofumpt", &tools.gofumpt),
            ("golangci_lint", &tools.golangci_lint),
            ("zip", &tools.zip),
            ("powershell", &tools.powershell),
        ] {
            options.insert(format!("tools.{key}"), path.display().to_string());
        }
    }
}
