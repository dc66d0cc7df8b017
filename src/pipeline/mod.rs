// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build, run and package pipeline.
//!
//! ```text
//!                       Pipeline { ToolContext, HostInfo, DependencyStager }
//!                           |
//!      +--------------------+--------------------+
//!      v                    v                    v
//!   compile()         run_* (orchestrator)    package()
//!      |                    |                    |
//!   stage() once      LogSession, overlay     recreate dist, copy,
//!   go build          ProcessHandle           compile_into, archive
//! ```
//!
//! Each entry point attaches a `StageFailed` context naming the stage that
//! failed, so the CLI diagnostic starts with it.

use std::sync::Arc;

use anyhow::Context;

use crate::config::Config;
use crate::core::host::HostInfo;
use crate::error::{Result, Stage, StageFailed};

pub mod compiler;
pub mod orchestrator;
pub mod packager;
pub mod stager;
pub mod target;
pub mod tools;

use stager::DependencyStager;
use tools::ToolContext;

/// Everything one top-level command needs, constructed once per invocation.
#[derive(Debug)]
pub struct Pipeline {
    ctx: ToolContext,
    host: HostInfo,
    stager: DependencyStager,
}

impl Pipeline {
    #[must_use]
    pub const fn new(config: Arc<Config>, host: HostInfo, dry_run: bool) -> Self {
        Self {
            ctx: ToolContext::new(config, dry_run),
            host,
            stager: DependencyStager::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        self.ctx.config()
    }

    #[must_use]
    pub const fn host(&self) -> &HostInfo {
        &self.host
    }

    #[must_use]
    pub const fn context(&self) -> &ToolContext {
        &self.ctx
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.ctx.is_dry_run()
    }

    /// Stages dependencies unless that already happened in this command.
    ///
    /// # Errors
    ///
    /// Returns the staging failure with a `dependency-staging` stage context.
    pub async fn stage(&self) -> Result<()> {
        self.stager
            .stage(&self.ctx)
            .await
            .context(StageFailed(Stage::DependencyStaging))
    }
}
