// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands.

use crate::config::Config;
use crate::error::Result;

/// Display current configuration options.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized to JSON.
pub fn run_options_command(config: &Config, json: bool) -> Result<()> {
    for line in render_options(config, json)? {
        println!("{line}");
    }
    Ok(())
}

fn render_options(config: &Config, json: bool) -> Result<Vec<String>> {
    if json {
        Ok(vec![serde_json::to_string_pretty(config)?])
    } else {
        Ok(config.format_options())
    }
}
