// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> Pipeline
//!   build, run, package, clean, quality (format/lint), config (options)
//! ```

pub mod build;
pub mod clean;
pub mod config;
pub mod package;
pub mod quality;
pub mod run;

#[cfg(test)]
mod tests;
