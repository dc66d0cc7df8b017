// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write BTreeMap<String, String>)
//! Sources: current_env(), dotenv::load(path), Env::new()
//! Ops: set/get/remove/overlay
//!
//! child env = current_env()  <-  .env file  <-  target overlay
//! ```
//!
//! - **Case-insensitive on Windows**
//! - **Copy-on-write**: Clones share data until modified

pub mod container;
pub mod dotenv;
pub mod types;


/// Captures the current process environment.
#[must_use]
pub fn current_env() -> container::Env {
    let vars = std::env::vars().collect();
    container::Env::from_map(vars)
}
