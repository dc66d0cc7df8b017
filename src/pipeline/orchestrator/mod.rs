// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launching built targets.
//!
//! # Coupled run
//!
//! ```text
//! server  spawn (async) ----------------------------- interrupt --> exited
//!                 \                                  ^
//! client           spawn --- wait (sync) --- exited -+
//!
//! events: service-spawned, foreground-spawned, foreground-exited,
//!         service-signalled, service-exited
//! ```
//!
//! Children run in the project root with the host environment, then the
//! `.env` layer, then their [`NetworkOverlay`] variables. Output goes to
//! `<session>/<stem>.log` when a [`LogSession`] is active, otherwise to the
//! console. Only the foreground target reads the terminal; a service gets
//! /dev/null as stdin.

pub mod overlay;

use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use super::Pipeline;
use super::target::Target;
use crate::core::env::container::Env;
use crate::core::env::{current_env, dotenv};
use crate::core::process::builder::{ProcessBuilder, ProcessExit};
use crate::core::process::handle::{ProcessHandle, ShutdownMode};
use crate::core::session::LogSession;
use crate::error::{FypError, ProcessError, Result, Stage, StageFailed};
pub use overlay::NetworkOverlay;

/// One step in the lifecycle of a coupled run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchEvent {
    ServiceSpawned { pid: Option<u32> },
    ForegroundSpawned { pid: Option<u32> },
    ForegroundExited(ProcessExit),
    ServiceSignalled(ShutdownMode),
    ServiceExited(ProcessExit),
}

impl LaunchEvent {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ServiceSpawned { .. } => "service-spawned",
            Self::ForegroundSpawned { .. } => "foreground-spawned",
            Self::ForegroundExited(_) => "foreground-exited",
            Self::ServiceSignalled(_) => "service-signalled",
            Self::ServiceExited(_) => "service-exited",
        }
    }
}

/// Ordered lifecycle events of a coupled run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    events: Vec<LaunchEvent>,
    escalated: bool,
}

impl RunReport {
    #[must_use]
    pub fn events(&self) -> &[LaunchEvent] {
        &self.events
    }

    /// Event kinds in order, e.g. for logging.
    #[must_use]
    pub fn kinds(&self) -> Vec<&'static str> {
        self.events.iter().map(LaunchEvent::kind).collect()
    }

    /// The graceful interrupt timed out and the service was killed.
    #[must_use]
    pub const fn escalated(&self) -> bool {
        self.escalated
    }

    #[must_use]
    pub fn foreground_exit(&self) -> Option<ProcessExit> {
        self.events.iter().find_map(|e| match e {
            LaunchEvent::ForegroundExited(exit) => Some(*exit),
            _ => None,
        })
    }

    #[must_use]
    pub fn service_exit(&self) -> Option<ProcessExit> {
        self.events.iter().find_map(|e| match e {
            LaunchEvent::ServiceExited(exit) => Some(*exit),
            _ => None,
        })
    }

    fn record(&mut self, event: LaunchEvent) {
        debug!(event = event.kind(), "run event");
        self.events.push(event);
    }
}

/// Environment and output routing shared by every launch of one command.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    overlay: NetworkOverlay,
    base_env: Env,
    session: Option<LogSession>,
}

impl LaunchPlan {
    #[must_use]
    pub fn new(overlay: NetworkOverlay, base_env: Env, session: Option<LogSession>) -> Self {
        Self {
            overlay,
            base_env,
            session,
        }
    }

    #[must_use]
    pub const fn overlay(&self) -> &NetworkOverlay {
        &self.overlay
    }

    #[must_use]
    pub const fn session(&self) -> Option<&LogSession> {
        self.session.as_ref()
    }

    /// Full environment for `target`.
    #[must_use]
    pub fn env_for(&self, target: Target) -> Env {
        let mut env = self.base_env.clone();
        self.overlay.apply(target, &mut env);
        env
    }
}

fn stage_error(stage: Stage, err: ProcessError) -> anyhow::Error {
    anyhow::Error::from(FypError::from(err)).context(StageFailed(stage))
}

impl Pipeline {
    /// Loads `.env`, resolves the network overlay and, when `pipe_logs` is
    /// set, creates a new log session.
    ///
    /// # Errors
    ///
    /// Returns a `launch` stage failure if `.env` cannot be read, defines an
    /// invalid port, or the session directory cannot be created.
    pub fn prepare_launch(&self, pipe_logs: bool) -> Result<LaunchPlan> {
        self.launch_plan(pipe_logs)
            .context(StageFailed(Stage::Launch))
    }

    fn launch_plan(&self, pipe_logs: bool) -> Result<LaunchPlan> {
        let paths = &self.config().paths;
        let dotenv = dotenv::load(&paths.env_file).map_err(FypError::from)?;
        let overlay = NetworkOverlay::resolve(&self.config().network, &dotenv)
            .map_err(FypError::from)?;

        let mut base_env = current_env();
        base_env.overlay(&dotenv);

        let session = if !pipe_logs {
            None
        } else if self.is_dry_run() {
            info!(logs = %paths.logs.display(), "[dry-run] Would create log session");
            None
        } else {
            let session = LogSession::create(&paths.logs).map_err(FypError::from)?;
            info!(dir = %session.dir().display(), "Logging to session");
            Some(session)
        };

        debug!(
            address = overlay.server_address(),
            tcp = overlay.tcp_port(),
            udp = overlay.udp_port(),
            "network overlay"
        );
        Ok(LaunchPlan::new(overlay, base_env, session))
    }

    fn launch_builder(&self, plan: &LaunchPlan, target: Target, binary: &Path) -> ProcessBuilder {
        let stem = target.stem(self.config());
        let builder = ProcessBuilder::new(binary)
            .cwd(self.config().paths.root())
            .env(plan.env_for(target))
            .name(stem);
        match plan.session() {
            Some(session) => builder.log_to_file(session.log_file(stem)),
            None => builder.inherit_stdio(),
        }
    }

    /// Runs one target and blocks until it exits.
    ///
    /// Returns `None` in dry-run mode, where nothing is launched.
    ///
    /// # Errors
    ///
    /// Returns a `launch` stage failure if the target cannot be spawned or
    /// exits unsuccessfully.
    pub async fn run_foreground(
        &self,
        plan: &LaunchPlan,
        target: Target,
        binary: &Path,
    ) -> Result<Option<ProcessExit>> {
        if self.is_dry_run() {
            info!(target = %target, binary = %binary.display(), "[dry-run] Would launch");
            return Ok(None);
        }

        let mut handle =
            ProcessHandle::new(self.launch_builder(plan, target, binary).inherit_stdin());
        handle.start().map_err(|e| stage_error(Stage::Launch, e))?;
        info!(target = %target, pid = ?handle.pid(), "Started");

        let exit = handle
            .wait()
            .await
            .map_err(|e| stage_error(Stage::Launch, e))?;
        info!(target = %target, exit = %exit, "Exited");
        exit.check(handle.name())
            .map_err(|e| stage_error(Stage::Launch, e))?;
        Ok(Some(exit))
    }

    /// Runs the server as a service and the client in the foreground.
    ///
    /// The server is spawned first. Once the client exits the server is
    /// interrupted (killed where interrupts are unsupported) and waited on.
    /// Returns only after both have terminated.
    ///
    /// # Errors
    ///
    /// - a server spawn failure, before the client is launched
    /// - a client failure, after the server has been stopped
    /// - a server that exited before it was asked to
    /// - a failure to stop the server
    pub async fn run_coupled(
        &self,
        plan: &LaunchPlan,
        client: &Path,
        server: &Path,
    ) -> Result<RunReport> {
        let mut report = RunReport::default();

        if self.is_dry_run() {
            info!(
                server = %server.display(),
                client = %client.display(),
                "[dry-run] Would launch server, then client"
            );
            return Ok(report);
        }

        let mut service = ProcessHandle::new(self.launch_builder(plan, Target::Server, server));
        service
            .start()
            .map_err(|e| stage_error(Stage::Launch, e))?;
        report.record(LaunchEvent::ServiceSpawned { pid: service.pid() });
        info!(pid = ?service.pid(), "Server started");

        let mut foreground = ProcessHandle::new(
            self.launch_builder(plan, Target::Client, client)
                .inherit_stdin(),
        );
        let foreground_result = match foreground.start() {
            Ok(()) => {
                report.record(LaunchEvent::ForegroundSpawned {
                    pid: foreground.pid(),
                });
                info!(pid = ?foreground.pid(), "Client started");
                match foreground.wait().await {
                    Ok(exit) => {
                        report.record(LaunchEvent::ForegroundExited(exit));
                        info!(exit = %exit, "Client exited");
                        exit.check(foreground.name())
                    }
                    Err(e) => Err(e),
                }
            }
            Err(e) => Err(e),
        };

        let mode = ShutdownMode::for_interrupt_support(self.host.platform().supports_interrupt());
        let service_result = match service
            .shutdown(mode, self.config().run.shutdown_timeout())
            .await
        {
            Ok(outcome) => {
                if let Some(mode) = outcome.signalled {
                    report.record(LaunchEvent::ServiceSignalled(mode));
                }
                report.record(LaunchEvent::ServiceExited(outcome.exit));
                report.escalated = outcome.escalated;
                if outcome.signalled.is_none() {
                    Err(stage_error(
                        Stage::Launch,
                        ProcessError::ExitedEarly {
                            command: service.name().to_string(),
                            status: outcome.exit.to_string(),
                        },
                    ))
                } else {
                    Ok(())
                }
            }
            Err(e) => Err(stage_error(Stage::Shutdown, e)),
        };

        debug!(events = ?report.kinds(), "run finished");
        foreground_result.map_err(|e| stage_error(Stage::Launch, e))?;
        service_result?;
        Ok(report)
    }
}
