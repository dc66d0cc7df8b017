// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network settings shared by the server and client of one run.
//!
//! ```text
//!                NetworkOverlay { address, tcp, udp }
//!                 /                          \
//!   server: TCP_PORT=tcp UDP_PORT=udp    client: SERVER_ADDRESS=address
//!                                                SERVER_TCP_PORT=tcp
//!                                                SERVER_UDP_PORT=udp
//! ```
//!
//! Both projections come from the same value, so the client always points
//! at the ports the server listens on.

use crate::config::types::NetworkConfig;
use crate::core::env::container::Env;
use crate::error::ConfigError;
use crate::pipeline::target::Target;

pub const TCP_PORT: &str = "TCP_PORT";
pub const UDP_PORT: &str = "UDP_PORT";
pub const SERVER_ADDRESS: &str = "SERVER_ADDRESS";
pub const SERVER_TCP_PORT: &str = "SERVER_TCP_PORT";
pub const SERVER_UDP_PORT: &str = "SERVER_UDP_PORT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkOverlay {
    server_address: String,
    tcp_port: u16,
    udp_port: u16,
}

impl NetworkOverlay {
    #[must_use]
    pub fn from_config(network: &NetworkConfig) -> Self {
        Self {
            server_address: network.server_address.clone(),
            tcp_port: network.tcp_port,
            udp_port: network.udp_port,
        }
    }

    /// Config values, with ports from the `.env` layer taking precedence.
    ///
    /// The server reads `.env` on its own, so a port defined there is the
    /// one it actually listens on.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `.env` defines a port that is
    /// not a number in `1..=65535`.
    pub fn resolve(network: &NetworkConfig, dotenv: &Env) -> Result<Self, ConfigError> {
        let mut overlay = Self::from_config(network);
        if let Some(port) = env_port(dotenv, TCP_PORT)? {
            overlay.tcp_port = port;
        }
        if let Some(port) = env_port(dotenv, UDP_PORT)? {
            overlay.udp_port = port;
        }
        Ok(overlay)
    }

    #[must_use]
    pub fn server_address(&self) -> &str {
        &self.server_address
    }

    #[must_use]
    pub const fn tcp_port(&self) -> u16 {
        self.tcp_port
    }

    #[must_use]
    pub const fn udp_port(&self) -> u16 {
        self.udp_port
    }

    /// Variables the server listens on.
    #[must_use]
    pub fn server_vars(&self) -> Vec<(&'static str, String)> {
        vec![
            (TCP_PORT, self.tcp_port.to_string()),
            (UDP_PORT, self.udp_port.to_string()),
        ]
    }

    /// Variables telling the client where the server is.
    #[must_use]
    pub fn client_vars(&self) -> Vec<(&'static str, String)> {
        vec![
            (SERVER_ADDRESS, self.server_address.clone()),
            (SERVER_TCP_PORT, self.tcp_port.to_string()),
            (SERVER_UDP_PORT, self.udp_port.to_string()),
        ]
    }

    #[must_use]
    pub fn vars_for(&self, target: Target) -> Vec<(&'static str, String)> {
        match target {
            Target::Client => self.client_vars(),
            Target::Server => self.server_vars(),
        }
    }

    /// Writes the target's variables over `env`.
    pub fn apply(&self, target: Target, env: &mut Env) {
        for (key, value) in self.vars_for(target) {
            env.set(key, value);
        }
    }
}

fn env_port(dotenv: &Env, key: &str) -> Result<Option<u16>, ConfigError> {
    let Some(raw) = dotenv.get(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(Some(port)),
        _ => Err(ConfigError::InvalidValue {
            section: "env_file".to_string(),
            key: key.to_string(),
            message: format!("'{raw}' is not a valid port"),
        }),
    }
}
