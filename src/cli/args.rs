// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command arguments.

use clap::Args;

use crate::core::host::Platform;

/// Arguments for the `package` command.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct PackageArgs {
    /// Platform to package for.
    #[arg(short = 'p', long = "platform", value_enum, default_value_t = Platform::host())]
    pub platform: Platform,
}

/// Arguments for the `clean` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct CleanArgs {
    /// Also removes the staging directory and every platform archive.
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the `options` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct OptionsArgs {
    /// Prints the configuration as JSON instead of `key = value` lines.
    #[arg(long)]
    pub json: bool,
}
