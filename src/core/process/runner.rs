// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()                              spawn()
//!   |                                  |
//!   v                                  v
//! build_command()                    build_command()
//!   args, cwd, env, stdin, stdio       |
//!   log file: create + try_clone       v
//!   |                                ProcessHandle (Running)
//!   v                                  forwarders for piped streams
//! spawn, drop Command (closes our
//! copies of the log file)
//!   |
//!   v
//! join!(drain stdout, drain stderr, wait)
//!   |
//!   v
//! check exit
//!   |
//!   v
//! ProcessExit
//! ```

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::{ProcessBuilder, ProcessExit, ProcessFlags, StreamFlags};
use super::handle::ProcessHandle;
use super::io::{Stream, drain};
use crate::error::ProcessError;

impl ProcessBuilder {
    /// Spawns the process and waits for it to complete.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if:
    /// - the log file cannot be opened or the child cannot be spawned;
    /// - waiting on the child fails;
    /// - the process exits unsuccessfully.
    pub async fn run(self) -> std::result::Result<ProcessExit, ProcessError> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut child = {
            let mut command = self.build_command(&cmd_line)?;
            command.kill_on_drop(true);
            command
                .spawn()
                .map_err(|source| ProcessError::SpawnFailed {
                    command: cmd_line.clone(),
                    source,
                })?
        };
        trace!(process = %name, pid = ?child.id(), "spawned");

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let ((), (), status) = tokio::join!(
            drain(stdout, self.stdout_stream(), &name, Stream::Stdout),
            drain(stderr, self.stderr_stream(), &name, Stream::Stderr),
            child.wait(),
        );
        let status = status.map_err(|source| ProcessError::WaitFailed {
            command: cmd_line.clone(),
            source,
        })?;

        let exit = ProcessExit::from(status);
        exit.check(&name)?;

        trace!(process = %name, %exit, "completed");
        Ok(exit)
    }

    /// Spawns the process and returns a handle without waiting.
    ///
    /// Piped streams with `FORWARD_TO_LOG` are forwarded by background
    /// tasks.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the log file cannot be opened or the
    /// child cannot be spawned. The handle stays in `Created` in that case.
    pub fn spawn(self) -> std::result::Result<ProcessHandle, ProcessError> {
        let mut handle = ProcessHandle::new(self);
        handle.start()?;
        Ok(handle)
    }

    /// Builds the tokio Command from this builder's configuration.
    pub(super) fn build_command(&self, cmd_line: &str) -> std::result::Result<Command, ProcessError> {
        let mut command = Command::new(self.program());
        command.args(self.arguments());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        if let Some(env) = self.environment() {
            command.env_clear();
            command.envs(env.iter());
        }

        if self.process_flags().contains(ProcessFlags::INHERIT_STDIN) {
            command.stdin(Stdio::inherit());
        } else {
            command.stdin(Stdio::null());
        }

        if let Some(path) = self.log_file() {
            let open_failed = |source| ProcessError::SpawnFailed {
                command: cmd_line.to_string(),
                source,
            };
            let file = std::fs::File::create(path).map_err(open_failed)?;
            let err_file = file.try_clone().map_err(open_failed)?;
            command.stdout(Stdio::from(file));
            command.stderr(Stdio::from(err_file));
        } else {
            command.stdout(Self::stdio_from_flags(self.stdout_stream()));
            command.stderr(Self::stdio_from_flags(self.stderr_stream()));
        }

        Ok(command)
    }

    /// Converts `StreamFlags` to Stdio configuration.
    fn stdio_from_flags(flags: StreamFlags) -> Stdio {
        if flags.contains(StreamFlags::INHERIT) {
            Stdio::inherit()
        } else {
            Stdio::piped()
        }
    }
}
