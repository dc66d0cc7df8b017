// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable struct and copy-on-write implementation.
//!
//! ```text
//! Env (copy-on-write)
//! data: Option<Arc<EnvData>> + owned flag
//! clone shares Arc until copy_for_write()
//! ```

use super::types::{EnvData, EnvKey};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A set of environment variables with copy-on-write semantics.
///
/// Cloning is cheap: copies share data until one of them is modified.
/// The host environment is captured once per invocation and every child
/// environment is a clone of it with a target overlay applied.
#[derive(Debug, Clone)]
pub struct Env {
    data: Option<Arc<EnvData>>,
    /// Whether we own the data exclusively (for copy-on-write)
    owned: bool,
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: None,
            owned: false,
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        let data = EnvData::from_vars(vars.into_iter().map(|(k, v)| (EnvKey::new(k), v)).collect());
        Self {
            data: Some(Arc::new(data)),
            owned: true,
        }
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.copy_for_write();
        if let Some(ref mut data) = self.data {
            Arc::make_mut(data)
                .vars_mut()
                .insert(EnvKey::new(key.into()), value.into());
        }
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.vars().get(&EnvKey::new(key)).map(String::as_str))
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.copy_for_write();
        if let Some(ref mut data) = self.data {
            Arc::make_mut(data).vars_mut().remove(&EnvKey::new(key));
        }
        self
    }

    /// Layers `other` on top of this environment. Keys in `other` win.
    pub fn overlay(&mut self, other: &Self) -> &mut Self {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
        self
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    /// Returns an iterator over environment variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .iter()
            .flat_map(|d| d.vars().iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.as_ref().is_none_or(|d| d.vars().is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.vars().len())
    }

    /// Ensures we have exclusive ownership of the data for modification.
    pub fn copy_for_write(&mut self) {
        if self.owned {
            return;
        }

        self.data = Some(Arc::new(
            self.data.as_deref().cloned().unwrap_or_default(),
        ));
        self.owned = true;
    }
}
