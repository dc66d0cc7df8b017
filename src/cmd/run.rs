// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run commands.
//!
//! ```text
//! run / run_with_logs     prepare_launch --> compile server, client --> run_coupled
//! run_client / run_server prepare_launch --> compile target         --> run_foreground
//! ```
//!
//! The log session is created before anything is built, so a failed build
//! still leaves the session directory behind.

use tracing::info;

use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::pipeline::target::Target;

/// Builds both targets and runs the server alongside the client.
///
/// With `pipe_logs` each program writes to its own file in a new log
/// session; without it both share this console.
///
/// # Errors
///
/// Returns a staging, compile, launch or shutdown failure.
pub async fn run_coupled_command(pipeline: &Pipeline, pipe_logs: bool) -> Result<()> {
    let plan = pipeline.prepare_launch(pipe_logs)?;
    let platform = pipeline.host().platform();

    let server = pipeline.compile(Target::Server, platform).await?;
    let client = pipeline.compile(Target::Client, platform).await?;

    let report = pipeline.run_coupled(&plan, &client, &server).await?;
    if report.escalated() {
        info!("Server did not stop in time and was killed");
    }
    if let Some(session) = plan.session() {
        info!(dir = %session.dir().display(), "Logs written");
    }
    Ok(())
}

/// Builds `target` and runs it in the foreground with its output in a new
/// log session.
///
/// # Errors
///
/// Returns a staging, compile or launch failure.
pub async fn run_single_command(pipeline: &Pipeline, target: Target) -> Result<()> {
    let plan = pipeline.prepare_launch(true)?;
    let binary = pipeline.compile(target, pipeline.host().platform()).await?;

    if let Some(exit) = pipeline.run_foreground(&plan, target, &binary).await? {
        info!(target = %target, exit = %exit, "Run finished");
    }
    Ok(())
}
