// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Handles for processes that outlive the call that started them.
//!
//! ```text
//!            start()
//! Created ----------> Running ----- detach() ----> Detached
//!                        |                            |
//!                     wait()                        wait()
//!                        v                            |
//!                      Waited --- exit observed ---> Terminated
//!
//! Drop while Running/Waited and still alive  -->  kill
//! ```

use std::path::Path;
use std::time::Duration;

use tokio::process::Child;
use tracing::{debug, info, trace, warn};

use super::builder::{ProcessBuilder, ProcessExit, StreamFlags};
use super::io::{Stream, drain};
use super::signal;
use crate::error::ProcessError;

/// Lifecycle state of a [`ProcessHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Created,
    Running,
    /// Someone is blocked waiting for the exit.
    Waited,
    /// Still running but no longer killed when the handle is dropped.
    Detached,
    Terminated,
}

impl ProcessState {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Running => "running",
            Self::Waited => "waited",
            Self::Detached => "detached",
            Self::Terminated => "terminated",
        }
    }

    const fn is_alive(self) -> bool {
        matches!(self, Self::Running | Self::Waited | Self::Detached)
    }
}

impl std::fmt::Display for ProcessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to ask a process to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownMode {
    /// Interrupt, then kill once the grace period runs out.
    Graceful,
    Forced,
}

impl ShutdownMode {
    /// Graceful where interrupts can be delivered, forced elsewhere.
    #[must_use]
    pub const fn for_interrupt_support(supported: bool) -> Self {
        if supported { Self::Graceful } else { Self::Forced }
    }
}

impl std::fmt::Display for ShutdownMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Graceful => "graceful",
            Self::Forced => "forced",
        })
    }
}

/// Result of [`ProcessHandle::shutdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShutdownOutcome {
    pub exit: ProcessExit,
    /// `None` if the process had already exited and was not signalled.
    pub signalled: Option<ShutdownMode>,
    /// A graceful shutdown ran out of time and the process was killed.
    pub escalated: bool,
}

/// A spawned process owned by the orchestrator.
#[derive(Debug)]
pub struct ProcessHandle {
    builder: ProcessBuilder,
    name: String,
    command_line: String,
    state: ProcessState,
    child: Option<Child>,
    pid: Option<u32>,
    exit: Option<ProcessExit>,
}

impl ProcessHandle {
    /// Creates a handle in the `Created` state. Nothing is spawned yet.
    #[must_use]
    pub fn new(builder: ProcessBuilder) -> Self {
        Self {
            name: builder.display_name(),
            command_line: builder.command_line(),
            builder,
            state: ProcessState::Created,
            child: None,
            pid: None,
            exit: None,
        }
    }

    /// Spawns the process.
    ///
    /// # Errors
    ///
    /// Returns `NotRunning` if the handle was already started and
    /// `SpawnFailed` if the process could not be created.
    pub fn start(&mut self) -> std::result::Result<(), ProcessError> {
        if self.state != ProcessState::Created {
            return Err(self.not_running());
        }

        if let Some(cwd) = self.builder.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %self.command_line, "spawn");

        let mut child = {
            let mut command = self.builder.build_command(&self.command_line)?;
            command.kill_on_drop(false);
            command
                .spawn()
                .map_err(|source| ProcessError::SpawnFailed {
                    command: self.command_line.clone(),
                    source,
                })?
        };

        self.forward(child.stdout.take(), self.builder.stdout_stream(), Stream::Stdout);
        self.forward(child.stderr.take(), self.builder.stderr_stream(), Stream::Stderr);

        self.pid = child.id();
        self.child = Some(child);
        self.state = ProcessState::Running;
        trace!(process = %self.name, pid = ?self.pid, "spawned");
        Ok(())
    }

    fn forward<R>(&self, reader: Option<R>, flags: StreamFlags, stream: Stream)
    where
        R: tokio::io::AsyncRead + Unpin + Send + 'static,
    {
        if let Some(reader) = reader {
            let name = self.name.clone();
            tokio::spawn(async move {
                drain(Some(reader), flags, &name, stream).await;
            });
        }
    }

    #[must_use]
    pub const fn pid(&self) -> Option<u32> {
        self.pid
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn state(&self) -> ProcessState {
        self.state
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.builder.log_file()
    }

    /// Exit status, once observed.
    #[must_use]
    pub const fn exit(&self) -> Option<ProcessExit> {
        self.exit
    }

    /// Waits for the process to exit.
    ///
    /// # Errors
    ///
    /// Returns `NotRunning` for a handle that was never started and
    /// `WaitFailed` if the OS wait fails.
    pub async fn wait(&mut self) -> std::result::Result<ProcessExit, ProcessError> {
        if let Some(exit) = self.exit {
            return Ok(exit);
        }
        if !self.state.is_alive() {
            return Err(self.not_running());
        }
        let Some(child) = self.child.as_mut() else {
            return Err(self.not_running());
        };

        if self.state == ProcessState::Running {
            self.state = ProcessState::Waited;
        }
        let status = child
            .wait()
            .await
            .map_err(|source| ProcessError::WaitFailed {
                command: self.command_line.clone(),
                source,
            })?;
        Ok(self.terminated(status.into()))
    }

    /// Checks for an exit without blocking.
    ///
    /// # Errors
    ///
    /// Returns `WaitFailed` if the OS query fails.
    pub fn try_wait(&mut self) -> std::result::Result<Option<ProcessExit>, ProcessError> {
        if let Some(exit) = self.exit {
            return Ok(Some(exit));
        }
        let Some(child) = self.child.as_mut() else {
            return Ok(None);
        };
        match child.try_wait() {
            Ok(Some(status)) => Ok(Some(self.terminated(status.into()))),
            Ok(None) => Ok(None),
            Err(source) => Err(ProcessError::WaitFailed {
                command: self.command_line.clone(),
                source,
            }),
        }
    }

    /// Sends an interrupt (SIGINT).
    ///
    /// # Errors
    ///
    /// Returns `NotRunning` if the process is not alive and `SignalFailed`
    /// if delivery fails or the platform has no interrupts.
    pub fn interrupt(&mut self) -> std::result::Result<(), ProcessError> {
        let pid = self.live_pid()?;
        signal::interrupt(pid).map_err(|message| ProcessError::SignalFailed {
            command: self.command_line.clone(),
            message,
        })?;
        debug!(process = %self.name, pid, "interrupt sent");
        Ok(())
    }

    /// Forcibly terminates the process without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns `NotRunning` if the process is not alive and `SignalFailed`
    /// if the kill fails.
    pub fn kill(&mut self) -> std::result::Result<(), ProcessError> {
        let pid = self.live_pid()?;
        if let Some(child) = self.child.as_mut() {
            child
                .start_kill()
                .map_err(|e| ProcessError::SignalFailed {
                    command: self.command_line.clone(),
                    message: e.to_string(),
                })?;
        }
        debug!(process = %self.name, pid, "kill sent");
        Ok(())
    }

    /// Stops the process and waits until it has terminated.
    ///
    /// A process that already exited is not signalled. A graceful shutdown
    /// that does not finish within `grace` is escalated to a kill.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if signalling or waiting fails.
    pub async fn shutdown(
        &mut self,
        mode: ShutdownMode,
        grace: Duration,
    ) -> std::result::Result<ShutdownOutcome, ProcessError> {
        if let Some(exit) = self.try_wait()? {
            return Ok(ShutdownOutcome {
                exit,
                signalled: None,
                escalated: false,
            });
        }

        let mut escalated = false;
        let exit = match mode {
            ShutdownMode::Graceful => {
                self.interrupt()?;
                if let Ok(exit) = tokio::time::timeout(grace, self.wait()).await {
                    exit?
                } else {
                    warn!(
                        process = %self.name,
                        grace = ?grace,
                        "did not stop after interrupt, killing"
                    );
                    escalated = true;
                    self.kill()?;
                    self.wait().await?
                }
            }
            ShutdownMode::Forced => {
                self.kill()?;
                self.wait().await?
            }
        };

        info!(process = %self.name, mode = %mode, exit = %exit, "stopped");
        Ok(ShutdownOutcome {
            exit,
            signalled: Some(mode),
            escalated,
        })
    }

    /// Leaves the process running when the handle is dropped.
    pub fn detach(&mut self) {
        if self.state.is_alive() {
            self.state = ProcessState::Detached;
        }
    }

    fn live_pid(&self) -> std::result::Result<u32, ProcessError> {
        match (self.state.is_alive(), self.pid) {
            (true, Some(pid)) => Ok(pid),
            _ => Err(self.not_running()),
        }
    }

    fn terminated(&mut self, exit: ProcessExit) -> ProcessExit {
        self.state = ProcessState::Terminated;
        self.exit = Some(exit);
        trace!(process = %self.name, exit = %exit, "terminated");
        exit
    }

    fn not_running(&self) -> ProcessError {
        ProcessError::NotRunning {
            command: self.command_line.clone(),
            state: self.state.to_string(),
        }
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        if !matches!(self.state, ProcessState::Running | ProcessState::Waited) {
            return;
        }
        if let Some(child) = self.child.as_mut()
            && matches!(child.try_wait(), Ok(None))
        {
            warn!(process = %self.name, pid = ?self.pid, "handle dropped while running, killing");
            let _ = child.start_kill();
        }
    }
}
