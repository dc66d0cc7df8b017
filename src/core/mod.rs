// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for host identity, environments, processes and log sessions.
//!
//! ```text
//!                 core
//!                  |
//!     +--------+---+-----+---------+
//!     |        |         |         |
//!     v        v         v         v
//!    env     host     process   session
//!     |        |         |         |
//!   Env    Platform   Builder   LogSession
//!   dotenv HostInfo   Handle    <logs>/<date>/<time>
//! ```

pub mod env;
pub mod host;
pub mod process;
pub mod session;
