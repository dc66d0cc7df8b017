// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interrupt delivery.

/// Sends SIGINT to `pid`.
#[cfg(unix)]
pub(super) fn interrupt(pid: u32) -> std::result::Result<(), String> {
    use nix::sys::signal::{Signal, kill};
    use nix::unistd::Pid;

    let pid = i32::try_from(pid).map_err(|_| format!("pid {pid} out of range"))?;
    kill(Pid::from_raw(pid), Signal::SIGINT).map_err(|errno| errno.to_string())
}

#[cfg(not(unix))]
pub(super) fn interrupt(_pid: u32) -> std::result::Result<(), String> {
    Err("interrupts are not supported on this platform".to_string())
}
