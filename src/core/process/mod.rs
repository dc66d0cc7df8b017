// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::which("go")
//!   .args() .cwd() .env() .inherit_stdin() .log_to_file()
//!   |
//!   +-- .run().await     synchronous: spawn, stream, wait
//!   |     --> ProcessExit (error unless successful)
//!   |
//!   +-- .spawn()         asynchronous
//!         --> ProcessHandle
//!             Created -> Running -> {Waited | Detached} -> Terminated
//!             interrupt() (SIGINT, unix) / kill() / shutdown(mode, grace)
//! ```

pub mod builder;
pub mod handle;
mod io;
mod runner;
mod signal;
